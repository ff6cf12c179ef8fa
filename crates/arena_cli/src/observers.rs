//! Console and log-file observers.
//!
//! Both render events as the same human-readable lines. Write failures are
//! logged and swallowed so a broken sink never stops a fight.

use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use arena_core::events::{FightEvent, FightObserver};

/// Write the lines for one event. Creation events are only written when
/// `with_created` is set.
fn write_event(out: &mut impl Write, event: &FightEvent<'_>, with_created: bool) -> io::Result<()> {
    match *event {
        FightEvent::Created { npc } => {
            if with_created {
                writeln!(
                    out,
                    "NPC: {}, Type: {}, Coords: {}, Health: {}, Damage: {}",
                    npc.name(),
                    npc.species(),
                    npc.position(),
                    npc.health(),
                    npc.damage()
                )?;
            }
        }
        FightEvent::RoundStart { round } => writeln!(out, "Round {round} started.")?,
        FightEvent::RoundEnd { round } => writeln!(out, "Round {round} ended.")?,
        FightEvent::Attack { attacker, target } => {
            writeln!(out, "NPC \"{}\" attacked \"{}\".", attacker.name(), target.name())?;
            writeln!(
                out,
                "NPC \"{}\" has {} health left.",
                target.name(),
                target.health()
            )?;
        }
        FightEvent::Death { victim, killer } => {
            writeln!(out, "NPC \"{}\" killed by \"{}\".", victim.name(), killer.name())?;
        }
    }
    Ok(())
}

/// Prints fight progress for a human watching the terminal.
#[derive(Debug)]
pub struct ConsoleObserver<W: Write = Stdout> {
    out: W,
}

impl ConsoleObserver<Stdout> {
    /// Console observer writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// Console observer writing to any sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FightObserver for ConsoleObserver<W> {
    fn on_event(&mut self, event: &FightEvent<'_>) {
        if let Err(e) = write_event(&mut self.out, event, false) {
            tracing::warn!("Console observer failed to write: {e}");
        }
    }
}

/// Appends every event, creations included, to a log file.
#[derive(Debug)]
pub struct FileObserver {
    log: LineWriter<File>,
    path: PathBuf,
}

impl FileObserver {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            log: LineWriter::new(file),
            path,
        })
    }
}

impl FightObserver for FileObserver {
    fn on_event(&mut self, event: &FightEvent<'_>) {
        if let Err(e) = write_event(&mut self.log, event, true) {
            tracing::warn!(path = %self.path.display(), "File observer failed to write: {e}");
        }
    }
}
