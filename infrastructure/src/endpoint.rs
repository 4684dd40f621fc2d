use std::fmt::Debug;
use url::Url;

/// A well known service endpoint, used for defaults of the command line arguments.
pub trait Endpoint: Debug {
    const PORT: u16;
    const PATH: &'static str;

    fn port() -> u16 {
        Self::PORT
    }

    fn url() -> Url {
        Url::parse(&format!("http://localhost:{}{}", Self::PORT, Self::PATH)).unwrap()
    }
}

macro_rules! endpoint {
    ($name:ident, $port:literal, $path:literal) => {
        #[derive(Clone, Copy, Debug)]
        pub struct $name;

        impl Endpoint for $name {
            const PORT: u16 = $port;
            const PATH: &'static str = $path;
        }
    };
}

endpoint!(Cvedb, 8000, "/");
