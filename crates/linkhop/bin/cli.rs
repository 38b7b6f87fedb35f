use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "LINKHOP_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "LINKHOP_BASE_URL";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_BASE_URL: &str = linkhop_registrar::registrar::DEFAULT_BASE_URL;

#[derive(Debug, Parser)]
#[command(name = "linkhop", about = "Register short URLs at the console and serve their redirects")]
pub struct CLI {
    /// Address the redirect server listens on.
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public prefix of the short URLs printed after each registration.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_behaviour() {
        let cli = CLI::try_parse_from(["linkhop"]).unwrap();

        assert_eq!(cli.listen_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.base_url, "http://localhost:8080");
    }

    #[test]
    fn flags_override_defaults() {
        let cli = CLI::try_parse_from([
            "linkhop",
            "--listen-addr",
            "127.0.0.1:9090",
            "--base-url",
            "https://lh.example",
        ])
        .unwrap();

        assert_eq!(cli.listen_addr, "127.0.0.1:9090".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.base_url, "https://lh.example");
    }

    #[test]
    fn invalid_listen_addr_is_rejected() {
        assert!(CLI::try_parse_from(["linkhop", "--listen-addr", "not-an-addr"]).is_err());
    }
}
