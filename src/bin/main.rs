mod config;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use ipnet::Ipv6Net;
use log::{debug, error, info};

use config::{Command, Config};

use ipaddr6::{
    addr::{format_addr_with, parse_addr_with},
    ifaddr::parse_ifaddr_with,
    mask_from_prefix, parse_prefix, same_network, StdNetCodec, TextCodec,
};

fn main() -> ExitCode {
    let config = Config::parse();
    Builder::new().filter_level(config.loglevel.into()).init();
    debug!("Parsed config: {:?}", config);

    match run(&StdNetCodec, &config) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
fn test_run(codec: &dyn TextCodec, config: &Config) -> Result<String, Box<dyn Error>> {
    run(codec, config)
}

fn run(codec: &dyn TextCodec, config: &Config) -> Result<String, Box<dyn Error>> {
    let name: &'static str = (&config.command).into();
    debug!("Running command {}", name);

    match &config.command {
        Command::Addr { text } => {
            let addr = parse_addr_with(codec, text)?;
            Ok(format_addr_with(codec, &addr)?)
        }
        Command::Prefix { text } => Ok(parse_prefix(text)?.to_string()),
        Command::Ifaddr { text, scope } => {
            let ifaddr = parse_ifaddr_with(codec, text)?.with_scope(*scope);
            let net = Ipv6Net::try_from(ifaddr)?;
            info!("Parsed interface address {} in network {}", ifaddr, net.trunc());
            Ok(format!(
                "address: {}\nprefix: {}\nscope: {}\nmask: {}\nnetwork: {}",
                format_addr_with(codec, &ifaddr.address())?,
                ifaddr.prefix(),
                ifaddr.scope(),
                format_addr_with(codec, &ifaddr.mask())?,
                format_addr_with(codec, &ifaddr.network())?,
            ))
        }
        Command::Mask { prefix } => {
            let prefix = parse_prefix(prefix)?;
            Ok(format_addr_with(codec, &mask_from_prefix(prefix))?)
        }
        Command::SameNetwork {
            first,
            second,
            prefix,
        } => {
            let a = parse_addr_with(codec, first)?;
            let b = parse_addr_with(codec, second)?;
            let prefix = parse_prefix(prefix)?;
            let same = same_network(&a, &b, prefix);
            info!("{} and {} share their first {} bits: {}", first, second, prefix, same);
            Ok(same.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use ipaddr6::{AddrError, Ipv6Address, Scope, StdNetCodec, TextCodec};
    use mockall::mock;

    use crate::config::{Command, Config, Loglevel};
    use crate::test_run;

    mock! {
        TextCodec {}
        impl TextCodec for TextCodec {
            fn text_to_addr(&self, text: &str) -> Result<Ipv6Address, AddrError>;
            fn addr_to_text(&self, addr: &Ipv6Address) -> Result<String, AddrError>;
        }
    }

    fn config(command: Command) -> Config {
        Config {
            command,
            loglevel: Loglevel::Info,
        }
    }

    // Forwards every call to the real codec
    fn passthrough_codec() -> MockTextCodec {
        let mut mock = MockTextCodec::new();
        mock.expect_text_to_addr()
            .returning(|text| StdNetCodec.text_to_addr(text));
        mock.expect_addr_to_text()
            .returning(|addr| StdNetCodec.addr_to_text(addr));
        mock
    }

    #[test]
    fn canonicalizes_address() {
        let out = test_run(
            &passthrough_codec(),
            &config(Command::Addr {
                text: "2001:0db8:0000::0001".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(out, "2001:db8::1");
    }

    #[test]
    fn reports_mask() {
        let out = test_run(
            &passthrough_codec(),
            &config(Command::Mask {
                prefix: "12".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(out, "fff0::");
    }

    #[test]
    fn describes_interface_address() {
        let out = test_run(
            &passthrough_codec(),
            &config(Command::Ifaddr {
                text: "2001:db8::1/64".to_string(),
                scope: Scope::LINK,
            }),
        )
        .unwrap();
        assert_eq!(
            out,
            "address: 2001:db8::1\nprefix: 64\nscope: link\nmask: ffff:ffff:ffff:ffff::\nnetwork: 2001:db8::"
        );
    }

    #[test]
    fn checks_network_membership() {
        let run = |prefix: &str| {
            test_run(
                &passthrough_codec(),
                &config(Command::SameNetwork {
                    first: "2001:db8::1".to_string(),
                    second: "2001:db9::1".to_string(),
                    prefix: prefix.to_string(),
                }),
            )
            .unwrap()
        };
        assert_eq!(run("31"), "true");
        assert_eq!(run("32"), "false");
    }

    #[test]
    fn rejects_bad_prefix_before_formatting() {
        let mut codec = MockTextCodec::new();
        codec.expect_addr_to_text().never();
        let result = test_run(
            &codec,
            &config(Command::Mask {
                prefix: "129".to_string(),
            }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn surfaces_codec_failures() {
        let mut codec = MockTextCodec::new();
        codec
            .expect_text_to_addr()
            .once()
            .returning(|_| Ok(Ipv6Address::UNSPECIFIED));
        codec
            .expect_addr_to_text()
            .once()
            .returning(|_| Err(AddrError::FormatError("no buffer".to_string())));
        let result = test_run(
            &codec,
            &config(Command::Addr {
                text: "::".to_string(),
            }),
        );
        assert!(result.unwrap_err().to_string().contains("no buffer"));
    }
}
