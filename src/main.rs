use env_logger::Target;

use udp_client::config::ClientConfig;
use udp_client::sender::send_datagram;
use udp_client::ClientError;

fn main() -> Result<(), ClientError> {
    env_logger::Builder::new()
        .target(Target::Stdout)
        .filter_level(log::LevelFilter::Debug)
        .init();

    let config = ClientConfig::load()?;
    send_datagram(&config)?;

    Ok(())
}
