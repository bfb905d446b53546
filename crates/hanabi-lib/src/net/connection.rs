//! Length-prefixed [`Message`] frames over a TCP stream.
//!
//! Each frame is a big-endian `u16` body length followed by a bincode encoded [`Message`].

use bytes::{Buf, Bytes, BytesMut};
use std::io::Cursor;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::{io::AsyncReadExt, io::AsyncWriteExt, io::BufWriter, net::TcpStream};

use super::{FrameError, Message};

const HEADER_LEN: usize = std::mem::size_of::<u16>();

pub fn from_socket(socket: TcpStream) -> (ConnectionTx, ConnectionRx) {
    let (read_stream, write_stream) = socket.into_split();

    (
        ConnectionTx {
            write_stream: BufWriter::new(write_stream),
        },
        ConnectionRx {
            read_stream,
            buffer: BytesMut::with_capacity(256),
        },
    )
}

#[derive(Debug)]
pub struct ConnectionTx {
    write_stream: BufWriter<OwnedWriteHalf>,
}

#[derive(Debug)]
pub struct ConnectionRx {
    read_stream: OwnedReadHalf,
    buffer: BytesMut,
}

impl ConnectionTx {
    pub async fn write_frame(&mut self, frame: Message) -> Result<(), FrameError> {
        let bytes: Bytes = bincode::serialize(&frame)?.into();
        self.write_raw(bytes).await
    }

    /// Write `body` as a single frame without encoding it first.
    pub async fn write_raw(&mut self, mut body: Bytes) -> Result<(), FrameError> {
        let len = u16::try_from(body.len()).map_err(|_| FrameError::FrameLength)?;
        self.write_stream.write_all(&len.to_be_bytes()).await?;
        self.write_stream.write_buf(&mut body).await?;
        self.write_stream.flush().await?;
        Ok(())
    }
}

impl ConnectionRx {
    /// Read the next message from the stream, returning `Ok(None)` once the peer closes it cleanly.
    ///
    /// A frame that arrives intact but can't be decoded is dropped from the buffer before
    /// [`FrameError::Bincode`] is returned, so the connection remains usable afterwards.
    pub async fn read_frame(&mut self) -> Result<Option<Message>, FrameError> {
        loop {
            if let Some(body) = self.parse_frame() {
                return match bincode::deserialize(&body) {
                    Ok(message) => Ok(Some(message)),
                    Err(e) => {
                        tracing::debug!(len = body.len(), "Dropped undecodable frame");
                        Err(e.into())
                    }
                };
            }

            if self.read_stream.read_buf(&mut self.buffer).await? == 0 {
                if self.buffer.is_empty() {
                    // Remote closed Connection
                    return Ok(None);
                } else {
                    // Connection closed while still sending data
                    return Err(FrameError::ConnectionReset);
                }
            }
        }
    }

    fn parse_frame(&mut self) -> Option<BytesMut> {
        if self.buffer.len() < HEADER_LEN {
            return None;
        }

        // Use a Cursor to avoid advancing the internal cursor of self.buffer
        let mut buf = Cursor::new(&self.buffer[..]);
        let message_len = usize::from(buf.get_u16());
        if self.buffer.len() < HEADER_LEN + message_len {
            return None;
        }

        self.buffer.advance(HEADER_LEN);
        Some(self.buffer.split_to(message_len))
    }
}
