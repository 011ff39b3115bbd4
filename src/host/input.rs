//! Host input events and their sources

use crossbeam_channel::{unbounded, Receiver, TryRecvError};
use log::{debug, warn};
use std::collections::VecDeque;
use std::io::BufRead;
use std::thread;

/// Discrete control events forwarded to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    TogglePause,
    Step,
    Quit,
}

impl HostEvent {
    /// Parse one line of terminal input.
    ///
    /// An empty line, `p` or `space` toggles pause, `s` steps, `q` quits.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "p" | "pause" | "space" => Some(HostEvent::TogglePause),
            "s" | "step" => Some(HostEvent::Step),
            "q" | "quit" | "exit" => Some(HostEvent::Quit),
            _ => None,
        }
    }
}

/// Anything the host loop can poll for events once per frame
pub trait InputSource {
    /// Events received since the last poll, oldest first. Must not block.
    fn poll_events(&mut self) -> Vec<HostEvent>;

    /// Whether no further events can ever arrive
    fn is_closed(&self) -> bool {
        false
    }
}

/// Reads lines from a reader on a background thread
pub struct LineInput {
    receiver: Receiver<HostEvent>,
    closed: bool,
}

impl LineInput {
    pub fn stdin() -> Self {
        Self::spawn(std::io::BufReader::new(std::io::stdin()))
    }

    pub fn spawn<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (sender, receiver) = unbounded();

        thread::spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Stopped reading input: {}", e);
                        break;
                    }
                };

                match HostEvent::parse(&line) {
                    Some(event) => {
                        if sender.send(event).is_err() {
                            break;
                        }
                    }
                    None => warn!("Unknown command: {:?}", line.trim()),
                }
            }
            debug!("Input reader finished");
        });

        Self {
            receiver,
            closed: false,
        }
    }
}

impl InputSource for LineInput {
    fn poll_events(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    break;
                }
            }
        }
        events
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Pre-recorded events, one batch per frame; empty once exhausted
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<HostEvent>>,
}

impl ScriptedInput {
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Vec<HostEvent>>,
    {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<HostEvent> {
        self.frames.pop_front().unwrap_or_default()
    }

    fn is_closed(&self) -> bool {
        self.frames.is_empty()
    }
}
