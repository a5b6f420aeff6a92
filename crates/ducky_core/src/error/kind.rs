//! Error classification
//!
//! Every reportable error carries an [`ErrorKind`]. Kinds keep the numeric
//! codes the engine has always used, grouped into bands of ten, and each kind
//! exposes its [`Band`] and [`Severity`] explicitly instead of callers
//! inspecting numeric ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exit code used when a critical error terminates the process
pub const CRITICAL_EXIT_CODE: i32 = 90;

/// Numeric band an error code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Code `0`
    Success,
    /// Codes `10`-`19`
    Generic,
    /// Codes `20`-`29`
    Memory,
    /// Codes `30`-`39`
    File,
    /// Codes `50`-`59`
    Audio,
    /// Codes `60`-`69`
    Input,
    /// Codes `70`-`79`
    Window,
    /// Codes `80`-`89`
    Graphics,
    /// Codes `90`-`99`
    Critical,
}

impl Band {
    /// Lowest code of the band
    pub const fn base_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Generic => 10,
            Self::Memory => 20,
            Self::File => 30,
            Self::Audio => 50,
            Self::Input => 60,
            Self::Window => 70,
            Self::Graphics => 80,
            Self::Critical => 90,
        }
    }

    /// Band for a raw code, `None` for codes outside every band
    pub const fn of_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            10..=19 => Some(Self::Generic),
            20..=29 => Some(Self::Memory),
            30..=39 => Some(Self::File),
            50..=59 => Some(Self::Audio),
            60..=69 => Some(Self::Input),
            70..=79 => Some(Self::Window),
            80..=89 => Some(Self::Graphics),
            90..=99 => Some(Self::Critical),
            _ => None,
        }
    }
}

/// How seriously a report should be taken, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Nothing went wrong
    Success,
    /// Advisory, the operation still completed
    Warning,
    /// The operation did not complete; the caller handles the absent result
    Failure,
    /// Malformed input (absent, empty or out of range)
    Precondition,
    /// Allocation or reallocation failed
    Resource,
    /// Unrecoverable, the process terminates after listeners ran
    Critical,
}

/// Classification of a reported error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operation succeeded
    Success,
    /// Generic failure
    Failure,
    /// Non-fatal advisory
    Warning,
    /// A required reference was absent
    NullReference,
    /// A required value was empty
    EmptyReference,
    /// Index past the end of a collection
    IndexOutOfBounds,
    /// Allocation failed
    MemoryFailure,
    /// File could not be read or written
    FileFailure,
    /// Audio device or stream failure
    AudioFailure,
    /// Input device failure
    InputFailure,
    /// Windowing library failed to initialize
    SdlInitFailure,
    /// Window could not be created
    WindowCreationFailure,
    /// Generic graphics failure
    GraphicsFailure,
    /// Shader failed to compile
    ShaderCompileFailure,
    /// Shader program failed to link
    ShaderProgramLinkFailure,
    /// Unrecoverable error
    Critical,
}

impl ErrorKind {
    /// Every kind, in code order
    pub const ALL: [Self; 16] = [
        Self::Success,
        Self::Failure,
        Self::Warning,
        Self::NullReference,
        Self::EmptyReference,
        Self::IndexOutOfBounds,
        Self::MemoryFailure,
        Self::FileFailure,
        Self::AudioFailure,
        Self::InputFailure,
        Self::SdlInitFailure,
        Self::WindowCreationFailure,
        Self::GraphicsFailure,
        Self::ShaderCompileFailure,
        Self::ShaderProgramLinkFailure,
        Self::Critical,
    ];

    /// Numeric code
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 10,
            Self::Warning => 11,
            Self::NullReference => 12,
            Self::EmptyReference => 13,
            Self::IndexOutOfBounds => 14,
            Self::MemoryFailure => 20,
            Self::FileFailure => 30,
            Self::AudioFailure => 50,
            Self::InputFailure => 60,
            Self::SdlInitFailure => 70,
            Self::WindowCreationFailure => 71,
            Self::GraphicsFailure => 80,
            Self::ShaderCompileFailure => 81,
            Self::ShaderProgramLinkFailure => 82,
            Self::Critical => 90,
        }
    }

    /// Symbolic name shown to users
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "DUCKY_SUCCESS",
            Self::Failure => "DUCKY_FAILURE",
            Self::Warning => "DUCKY_WARNING",
            Self::NullReference => "DUCKY_NULL_REFERENCE",
            Self::EmptyReference => "DUCKY_EMPTY_REFERENCE",
            Self::IndexOutOfBounds => "DUCKY_INDEX_OUT_OF_BOUNDS",
            Self::MemoryFailure => "DUCKY_MEMORY_FAILURE",
            Self::FileFailure => "DUCKY_FILE_FAILURE",
            Self::AudioFailure => "DUCKY_AUDIO_FAILURE",
            Self::InputFailure => "DUCKY_INPUT_FAILURE",
            Self::SdlInitFailure => "DUCKY_SDL_INIT_FAILURE",
            Self::WindowCreationFailure => "DUCKY_WINDOW_CREATION_FAILURE",
            Self::GraphicsFailure => "DUCKY_GRAPHICS_FAILURE",
            Self::ShaderCompileFailure => "DUCKY_SHADER_COMPILE_FAILURE",
            Self::ShaderProgramLinkFailure => "DUCKY_SHADER_PROGRAM_LINK_FAILURE",
            Self::Critical => "DUCKY_CRITICAL",
        }
    }

    /// Look up a kind by its numeric code
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Band the code falls in
    pub const fn band(self) -> Band {
        match self {
            Self::Success => Band::Success,
            Self::Failure
            | Self::Warning
            | Self::NullReference
            | Self::EmptyReference
            | Self::IndexOutOfBounds => Band::Generic,
            Self::MemoryFailure => Band::Memory,
            Self::FileFailure => Band::File,
            Self::AudioFailure => Band::Audio,
            Self::InputFailure => Band::Input,
            Self::SdlInitFailure | Self::WindowCreationFailure => Band::Window,
            Self::GraphicsFailure | Self::ShaderCompileFailure | Self::ShaderProgramLinkFailure => {
                Band::Graphics
            }
            Self::Critical => Band::Critical,
        }
    }

    /// Severity used for printing and termination decisions
    pub const fn severity(self) -> Severity {
        match self {
            Self::Success => Severity::Success,
            Self::Warning => Severity::Warning,
            Self::NullReference | Self::EmptyReference | Self::IndexOutOfBounds => {
                Severity::Precondition
            }
            Self::MemoryFailure => Severity::Resource,
            Self::Critical => Severity::Critical,
            Self::Failure
            | Self::FileFailure
            | Self::AudioFailure
            | Self::InputFailure
            | Self::SdlInitFailure
            | Self::WindowCreationFailure
            | Self::GraphicsFailure
            | Self::ShaderCompileFailure
            | Self::ShaderProgramLinkFailure => Severity::Failure,
        }
    }

    /// Whether reporting this kind terminates the process
    pub const fn is_critical(self) -> bool {
        matches!(self.band(), Band::Critical)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.name())
    }
}
