//! Best-effort IPv4 address lookup per interface.
//!
//! The Linux implementation asks the kernel directly with `SIOCGIFADDR` on a
//! throwaway `AF_INET` datagram socket, the same query `ifconfig` makes. Any
//! failure is reported as `None`; callers substitute the display sentinel.

use std::net::Ipv4Addr;

/// Resolves the primary IPv4 address of a network interface by name.
pub trait AddressResolver {
    fn resolve(&self, interface: &str) -> Option<Ipv4Addr>;
}

/// Resolver backed by the `SIOCGIFADDR` ioctl.
#[derive(Debug, Clone, Copy, Default)]
pub struct IoctlResolver;

impl AddressResolver for IoctlResolver {
    fn resolve(&self, interface: &str) -> Option<Ipv4Addr> {
        match sys::interface_ipv4(interface) {
            Ok(addr) => Some(addr),
            Err(e) => {
                tracing::trace!(interface, error = %e, "IPv4 lookup failed");
                None
            }
        }
    }
}

#[cfg(target_os = "linux")]
#[allow(unsafe_code)]
mod sys {
    use std::io;
    use std::mem;
    use std::net::Ipv4Addr;
    use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};
    use std::ptr;

    /// Longest name the kernel accepts; `IFNAMSIZ` includes the trailing NUL.
    const MAX_NAME_LEN: usize = libc::IFNAMSIZ - 1;

    pub(super) fn interface_ipv4(interface: &str) -> io::Result<Ipv4Addr> {
        let name = &interface.as_bytes()[..interface.len().min(MAX_NAME_LEN)];
        if name.contains(&0) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "interface name contains NUL",
            ));
        }

        // SAFETY: `ifreq` is a plain C struct/union aggregate; all-zero is a valid value.
        let mut request: libc::ifreq = unsafe { mem::zeroed() };
        for (dst, &src) in request.ifr_name.iter_mut().zip(name) {
            *dst = libc::c_char::from_ne_bytes([src]);
        }

        // SAFETY: plain socket(2) call; the descriptor is checked before use.
        let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM | libc::SOCK_CLOEXEC, 0) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: `fd` is a freshly created descriptor owned by nobody else.
        let socket = unsafe { OwnedFd::from_raw_fd(fd) };

        // SAFETY: `request` is a valid, NUL-terminated `ifreq` that outlives the call.
        let rc = unsafe {
            libc::ioctl(
                socket.as_raw_fd(),
                libc::SIOCGIFADDR,
                ptr::addr_of_mut!(request),
            )
        };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }

        // SAFETY: the union is at least `sockaddr_in` sized and fully initialised
        // (zeroed, then written by the kernel); the read tolerates any alignment.
        let addr: libc::sockaddr_in =
            unsafe { ptr::read_unaligned(ptr::addr_of!(request.ifr_ifru).cast()) };
        if libc::c_int::from(addr.sin_family) != libc::AF_INET {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "interface address is not IPv4",
            ));
        }

        Ok(Ipv4Addr::from(u32::from_be(addr.sin_addr.s_addr)))
    }
}

#[cfg(not(target_os = "linux"))]
mod sys {
    use std::io;
    use std::net::Ipv4Addr;

    pub(super) fn interface_ipv4(_interface: &str) -> io::Result<Ipv4Addr> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "SIOCGIFADDR lookup is only implemented on Linux",
        ))
    }
}
