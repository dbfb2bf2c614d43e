use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use anyhow::{bail, Context};
use quoridor::{sanitize_name, Message};
use tracing::{trace, warn};

use crate::BootReason;

/// The referee's end of the connection to one agent.
pub struct AgentConnection {
    pub name: String,
    stream: TcpStream,
    reader: BufReader<TcpStream>,
    // A re-usable buffer for IO.
    // Should always be empty before and after reading a line.
    buf: String,
    /// Cleared once a write fails; the agent is booted on its next turn.
    alive: bool,
}

impl AgentConnection {
    /// Connects to an agent and waits for it to introduce itself.
    ///
    /// The move timeout, if any, also bounds the wait for the introduction.
    pub fn connect(address: &str, move_timeout: Option<Duration>) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address)
            .with_context(|| format!("Could not connect to agent at {}", address))?;
        stream.set_read_timeout(move_timeout)?;
        stream.set_nodelay(true)?;
        let reader = BufReader::new(stream.try_clone()?);
        let mut connection = Self {
            name: String::new(),
            stream,
            reader,
            buf: String::new(),
            alive: true,
        };

        let line = connection
            .read_line()
            .with_context(|| format!("Agent at {} did not introduce itself", address))?;
        match line.parse::<Message>() {
            Ok(Message::Hello { name }) => connection.name = sanitize_name(&name),
            _ => bail!("Expected HELLO from agent at {}, got '{}'", address, line),
        }
        Ok(connection)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    fn read_line(&mut self) -> std::io::Result<String> {
        self.buf.clear();
        let num_bytes_read = self.reader.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            // 0 bytes read means EOF
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        let line = String::from(self.buf.trim_end());
        self.buf.clear();
        trace!(name: "Received", agent = %self.name, line = %line);
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        trace!(name: "Sending", agent = %self.name, line = %line);
        self.stream.write_all(line.as_bytes())?;
        self.stream.write_all(b"\n")?;
        self.stream.flush()
    }

    /// Sends a message. A failure marks the connection as dead instead of
    /// being returned, so that one broken agent does not stop a broadcast.
    pub fn send(&mut self, message: &Message) {
        if !self.alive {
            return;
        }
        if let Err(err) = self.write_line(&message.to_string()) {
            warn!(agent = %self.name, "Lost connection: {}", err);
            self.alive = false;
        }
    }

    /// Sends `GO?` and returns the agent's reply, unvalidated.
    pub fn request_move(&mut self) -> Result<String, BootReason> {
        if !self.alive {
            return Err(BootReason::Disconnected);
        }
        self.write_line(&Message::Go.to_string())
            .map_err(|_| BootReason::Disconnected)?;
        match self.read_line() {
            Ok(line) => Ok(line),
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => {
                Err(BootReason::Disconnected)
            }
            Err(err) => Err(BootReason::Transport(err)),
        }
    }

    pub fn close(self) {
        // The agent may already be gone
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}
