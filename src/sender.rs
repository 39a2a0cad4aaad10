use std::net::UdpSocket;

use log::debug;

use crate::config::ClientConfig;
use crate::ClientError;

// Sends the configured payload as one fire-and-forget datagram: no reply is
// awaited and delivery is not verified. Returns the number of bytes the
// network stack accepted.
pub fn send_datagram(config: &ClientConfig) -> Result<usize, ClientError> {
    debug!("Hello libcoevent UDP!");

    let destination = config.endpoint()?;
    let local = if destination.is_ipv4() {
        "0.0.0.0:0"
    } else {
        "[::]:0"
    };
    let socket = UdpSocket::bind(local)?;

    let sent = socket.send_to(config.payload.as_bytes(), destination)?;
    debug!("Data sent");

    Ok(sent)
}
