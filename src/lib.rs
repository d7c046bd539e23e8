pub mod codec;
pub mod session;

use std::fmt;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use thiserror::Error;

/// The fixed peer every datagram is sent to.
///
/// Resolved once at startup; the original host text is kept so status
/// messages can name the destination the way the operator wrote it.
#[derive(Debug, Clone)]
pub struct Destination {
    host: String,
    port: u16,
    addr: SocketAddr,
}

impl Destination {
    pub fn resolve(host: &str, port: u16) -> Result<Self, Error> {
        let addr = (host, port)
            .to_socket_addrs()
            .map_err(|source| Error::Resolve {
                host: host.to_owned(),
                port,
                source,
            })?
            .next()
            .ok_or_else(|| Error::NoAddress {
                host: host.to_owned(),
                port,
            })?;
        Ok(Self {
            host: host.to_owned(),
            port,
            addr,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Sink for outgoing payloads, one datagram per call.
pub trait Transmit {
    fn transmit(&mut self, payload: &[u8]) -> Result<(), Error>;
}

/// An open datagram socket aimed at a single destination.
pub struct Sender {
    socket: UdpSocket,
    dest: Destination,
}

impl Sender {
    /// Opens a socket on a system-assigned local port, in the address
    /// family of the destination.
    pub fn open(dest: Destination) -> Result<Self, Error> {
        let local: SocketAddr = match dest.addr() {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(local).map_err(Error::Socket)?;
        let bound = socket.local_addr().map_err(Error::Socket)?;
        log::debug!("bound {} for sends to {}", bound, dest.addr());
        Ok(Self { socket, dest })
    }

    pub fn destination(&self) -> &Destination {
        &self.dest
    }
}

impl Transmit for Sender {
    fn transmit(&mut self, payload: &[u8]) -> Result<(), Error> {
        log::trace!(
            "sending {} byte(s): {}",
            payload.len(),
            codec::encode(payload)
        );
        self.socket
            .send_to(payload, self.dest.addr())
            .map_err(Error::Send)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to resolve {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        source: io::Error,
    },

    #[error("{host}:{port} did not resolve to any address")]
    NoAddress { host: String, port: u16 },

    #[error("failed to create socket: {0}")]
    Socket(io::Error),

    #[error("failed to send datagram: {0}")]
    Send(io::Error),
}
