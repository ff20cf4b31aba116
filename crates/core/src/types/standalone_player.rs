use serde::{Deserialize, Serialize};

/// Desktop player targets Unity can build from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandalonePlayer {
    OSX,
    Windows32,
    Windows64,
    Linux64,
    LinuxUniversal,
}

impl StandalonePlayer {
    pub const ALL: [StandalonePlayer; 5] = [
        StandalonePlayer::OSX,
        StandalonePlayer::Windows32,
        StandalonePlayer::Windows64,
        StandalonePlayer::Linux64,
        StandalonePlayer::LinuxUniversal,
    ];

    /// Identifier stored in the `buildPlayer` parameter (also the Unity
    /// command line switch name)
    pub fn id(&self) -> &'static str {
        match self {
            StandalonePlayer::OSX => "buildOSXUniversalPlayer",
            StandalonePlayer::Windows32 => "buildWindowsPlayer",
            StandalonePlayer::Windows64 => "buildWindows64Player",
            StandalonePlayer::Linux64 => "buildLinux64Player",
            StandalonePlayer::LinuxUniversal => "buildLinuxUniversalPlayer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StandalonePlayer::OSX => "Mac OS X",
            StandalonePlayer::Windows32 => "Windows 32-bit",
            StandalonePlayer::Windows64 => "Windows 64-bit",
            StandalonePlayer::Linux64 => "Linux 64-bit",
            StandalonePlayer::LinuxUniversal => "Linux universal",
        }
    }

    /// Exact match on [`StandalonePlayer::id`], `None` for anything else
    pub fn try_parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|player| player.id() == value)
    }
}
