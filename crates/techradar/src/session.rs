//! Caller-owned viewer state: the selected data set and load bookkeeping.
//!
//! A [`Session`] replaces ambient global state. Loads are tagged with a
//! [`LoadTicket`]; only the ticket handed out by the most recent
//! [`Session::begin_load`] may publish its result, so a slow earlier load
//! can never overwrite a newer one.

use std::{fmt, path::PathBuf, str::FromStr};

use log::debug;
use thiserror::Error;

use techradar_core::semantic::PlacedId;

/// Name of the radar document inside a mode's data directory.
pub const DOCUMENT_FILE_NAME: &str = "radar.config.json";

/// Which of the two radar data sets is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Earth,
    Space,
}

impl Mode {
    /// Lower-case key used on the command line and in paths.
    pub fn key(self) -> &'static str {
        match self {
            Mode::Earth => "earth",
            Mode::Space => "space",
        }
    }

    /// Display word shown in the radar title.
    pub fn word(self) -> &'static str {
        match self {
            Mode::Earth => "Earth",
            Mode::Space => "Space",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Earth => Mode::Space,
            Mode::Space => Mode::Earth,
        }
    }

    /// Path of this mode's radar document under `data_root`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use techradar::session::Mode;
    /// # use std::path::Path;
    /// let path = Mode::Space.document_path(Path::new("data"));
    /// assert_eq!(path, Path::new("data/space/radar.config.json"));
    /// ```
    pub fn document_path(self, data_root: &std::path::Path) -> PathBuf {
        data_root.join(self.key()).join(DOCUMENT_FILE_NAME)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mode `{0}`, expected `earth` or `space`")]
pub struct UnknownMode(String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "earth" => Ok(Mode::Earth),
            "space" => Ok(Mode::Space),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// Monotonic counter handing out [`LoadTicket`]s.
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration {
    latest: u64,
}

impl LoadGeneration {
    /// Issues a new ticket, superseding every earlier one.
    pub fn next(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: Mode,
    generation: LoadGeneration,
    loading: bool,
    active: Option<PlacedId>,
    hovered: Option<PlacedId>,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Switches to the other mode and returns the previous one.
    ///
    /// Returns `None` and leaves the mode unchanged while a load is in flight.
    pub fn toggle_mode(&mut self) -> Option<Mode> {
        if self.loading {
            return None;
        }
        let previous = self.mode;
        self.mode = previous.toggled();
        debug!(from:% = previous, to:% = self.mode; "Mode toggled");
        Some(previous)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starts a load for the current mode.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loading = true;
        self.generation.next()
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.is_current(ticket)
    }

    /// Completes a load. Returns `false` if `ticket` was superseded, in
    /// which case the result must be discarded.
    ///
    /// A current ticket clears the selection, since identifiers of the old
    /// layout no longer refer to the same items.
    pub fn finish_load(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            debug!("Discarding superseded load");
            return false;
        }
        self.loading = false;
        self.hide_popup();
        true
    }

    /// Abandons a failed load, restoring `previous` as the mode.
    pub fn fail_load(&mut self, ticket: LoadTicket, previous: Mode) {
        if self.is_current(ticket) {
            self.loading = false;
            self.mode = previous;
        }
    }

    pub fn active(&self) -> Option<PlacedId> {
        self.active
    }

    pub fn set_active(&mut self, id: Option<PlacedId>) {
        self.active = id;
    }

    pub fn hovered(&self) -> Option<PlacedId> {
        self.hovered
    }

    pub fn set_hovered(&mut self, id: Option<PlacedId>) {
        self.hovered = id;
    }

    pub fn hide_popup(&mut self) {
        self.active = None;
        self.hovered = None;
    }
}
