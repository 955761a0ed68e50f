//! Unbuffered standard output.

use std::io;

use rustix::fd::{AsFd, BorrowedFd};

/// Writes straight to the process's standard output file descriptor.
///
/// There is no user-space buffer, so [`flush`] has nothing to do and each
/// [`write`] is one `write` system call.
///
/// [`flush`]: io::Write::flush
/// [`write`]: io::Write::write
#[derive(Debug, Default, Clone, Copy)]
pub struct RawStdout;

impl io::Write for RawStdout {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        write_fd(rustix::stdio::stdout(), buf)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        write_all_fd(rustix::stdio::stdout(), buf)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Write once to `fd`, retrying if interrupted by a signal.
fn write_fd(fd: BorrowedFd<'_>, buf: &[u8]) -> io::Result<usize> {
    loop {
        match rustix::io::write(fd, buf) {
            Err(rustix::io::Errno::INTR) => continue,
            result => return Ok(result?),
        }
    }
}

/// Write all of `buf` to `fd`, continuing after short writes.
pub(crate) fn write_all_fd<Fd: AsFd>(fd: Fd, buf: &[u8]) -> io::Result<()> {
    let fd = fd.as_fd();
    let mut remaining = buf;
    while !remaining.is_empty() {
        match write_fd(fd, remaining)? {
            0 => return Err(io::ErrorKind::WriteZero.into()),
            n => remaining = &remaining[n..],
        }
    }
    Ok(())
}
