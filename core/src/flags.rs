//! Flag extraction from nmap command lines.
//!
//! Two independent signals are collected from a command string:
//!
//! - **group letters**: every ASCII letter immediately following a `-s`
//!   marker (`-sUT -sCO` yields `U`, `T`, `C`, `O`),
//! - **standalone flags**: `-O`, `-A`, `-F`, `-C` and `-V` given on their own.
//!
//! The two never share storage. A group `O` means "IP protocol scan" while a
//! standalone `-O` means "OS detection".

/// Compact set of ASCII letters (`A-Z`, `a-z`).
///
/// # Examples
///
/// ```
/// use n2m_core::LetterSet;
///
/// let mut set = LetterSet::default();
/// set.insert('S');
/// assert!(set.contains('S'));
/// assert!(!set.contains('s'));
/// assert!(!set.insert('1'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet(u64);

impl LetterSet {
    fn bit(letter: char) -> Option<u64> {
        match letter {
            'A'..='Z' => Some(1 << (letter as u32 - 'A' as u32)),
            'a'..='z' => Some(1 << (26 + letter as u32 - 'a' as u32)),
            _ => None,
        }
    }

    /// Adds `letter`. Returns `false` for non-letters, which are ignored.
    pub fn insert(&mut self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => {
                self.0 |= bit;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    pub fn contains_any(&self, letters: &[char]) -> bool {
        letters.iter().any(|&letter| self.contains(letter))
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Standalone flags recognized outside of `-s` groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandaloneFlags {
    /// `-O`: OS detection.
    pub os_detection: bool,
    /// `-A`: aggressive mode (OS, version, scripts, traceroute).
    pub aggressive: bool,
    /// `-F`: fast mode, top 100 ports.
    pub fast: bool,
    /// `-C`
    pub script: bool,
    /// `-V`
    pub version: bool,
}

/// Flags extracted from one command line.
///
/// # Examples
///
/// ```
/// use n2m_core::FlagSet;
///
/// let flags = FlagSet::parse("sudo nmap -sUT -sCO -O 10.0.0.1");
/// assert!(flags.group.contains('U'));
/// assert!(flags.group.contains('O'));
/// assert!(flags.standalone.os_detection);
/// assert!(!flags.standalone.aggressive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagSet {
    /// Letters found after any `-s` marker.
    pub group: LetterSet,
    /// Flags given on their own.
    pub standalone: StandaloneFlags,
}

impl FlagSet {
    /// Extracts group letters and standalone flags from `command`.
    ///
    /// Never fails; a command without flags yields an empty set.
    pub fn parse(command: &str) -> Self {
        Self {
            group: parse_group_letters(command),
            standalone: StandaloneFlags {
                os_detection: has_standalone_flag(command, "-O"),
                aggressive: has_standalone_flag(command, "-A"),
                fast: has_standalone_flag(command, "-F"),
                script: has_standalone_flag(command, "-C"),
                version: has_standalone_flag(command, "-V"),
            },
        }
    }
}

fn parse_group_letters(command: &str) -> LetterSet {
    let mut letters = LetterSet::default();
    for (idx, marker) in command.match_indices("-s") {
        for ch in command[idx + marker.len()..].chars() {
            if !ch.is_ascii_alphabetic() {
                break;
            }
            letters.insert(ch);
        }
    }
    letters
}

/// Returns `true` when `flag` occurs followed by whitespace, end of input, or
/// directly by a `-`.
///
/// Whitespace between the flag and a following `-` token is covered by the
/// whitespace case. A value glued to the flag that itself starts with `-`
/// also counts as standalone.
///
/// # Examples
///
/// ```
/// use n2m_core::flags::has_standalone_flag;
///
/// assert!(has_standalone_flag("nmap -O 10.0.0.1", "-O"));
/// assert!(has_standalone_flag("nmap 10.0.0.1 -O", "-O"));
/// assert!(has_standalone_flag("nmap -O-p- 10.0.0.1", "-O"));
/// assert!(!has_standalone_flag("nmap -Pn 10.0.0.1", "-P"));
/// ```
pub fn has_standalone_flag(command: &str, flag: &str) -> bool {
    command.match_indices(flag).any(|(idx, matched)| {
        let rest = &command[idx + matched.len()..];
        rest.is_empty() || rest.starts_with(|ch: char| ch.is_whitespace() || ch == '-')
    })
}
