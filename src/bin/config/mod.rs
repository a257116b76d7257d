use clap::ValueEnum;
use clap::{Parser, Subcommand};
use ipaddr6::Scope;
use log::LevelFilter;
use strum::IntoStaticStr;

/// Used to set the applications loglevel
// This is essentially a re-creation of log:Level. However, that enum doesn't derive ValueEnum, so we have to do it manually here
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum)]
pub enum Loglevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl From<Loglevel> for LevelFilter {
    fn from(ll: Loglevel) -> Self {
        match ll {
            Loglevel::Error => LevelFilter::Error,
            Loglevel::Warn => LevelFilter::Warn,
            Loglevel::Info => LevelFilter::Info,
            Loglevel::Debug => LevelFilter::Debug,
            Loglevel::Trace => LevelFilter::Trace,
        }
    }
}
impl Default for Loglevel {
    fn default() -> Self {
        Loglevel::Info
    }
}

macro_rules! env_prefix {
    () => {
        "IPADDR6_"
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Subcommand, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Command {
    /// Print an IPv6 address in canonical form
    Addr { text: String },
    /// Validate a prefix length (0-128)
    Prefix { text: String },
    /// Parse an `address/prefix` token and show its mask and network
    Ifaddr {
        text: String,
        /// Scope to attach, either a name (global, site, link, host) or a number
        #[arg(long, short = 's', default_value = "global")]
        scope: Scope,
    },
    /// Print the network mask for a prefix length
    Mask { prefix: String },
    /// Check whether two addresses share their first PREFIX bits
    SameNetwork {
        first: String,
        second: String,
        prefix: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        value_enum,
        long,
        short = 'l',
        global = true,
        env = concat!(env_prefix!(), "LOGLEVEL"),
        default_value_t = Loglevel::default()
    )]
    pub loglevel: Loglevel,
}
