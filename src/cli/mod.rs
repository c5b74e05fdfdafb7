use clap::Parser;
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "http://127.0.0.1:7280")]
    pub quickwit_url: Url,
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Browser key for the map provider. When absent the frontend gets an
    /// error payload from `/map/config` instead of a usable map.
    #[arg(long)]
    pub maps_api_key: Option<String>,
}
