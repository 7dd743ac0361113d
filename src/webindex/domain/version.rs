use std::cmp::Ordering;

/// Debian version comparison.
///
/// A version string is `[epoch:]upstream[-revision]`: the epoch is the
/// numeric prefix before the first `:`, the revision everything after the
/// last `-`. Epochs compare numerically (missing = 0), upstream and revision
/// compare with the run-based algorithm below (missing revision = `0`).
///
/// This is a total order over arbitrary strings; there is no invalid input.
pub fn compare(a: &str, b: &str) -> Ordering {
    let (a_epoch, a_upstream, a_revision) = split_version(a);
    let (b_epoch, b_upstream, b_revision) = split_version(b);

    a_epoch
        .cmp(&b_epoch)
        .then_with(|| compare_fragment(a_upstream, b_upstream))
        .then_with(|| compare_fragment(a_revision, b_revision))
}

/// Split a version string into (epoch, upstream, revision).
fn split_version(version: &str) -> (u64, &str, &str) {
    let (epoch, rest) = match version.split_once(':') {
        // A malformed epoch still has to compare somehow; 0 keeps the
        // order total.
        Some((prefix, rest)) => (prefix.parse().unwrap_or(0), rest),
        None => (0, version),
    };

    match rest.rsplit_once('-') {
        Some((upstream, revision)) => (epoch, upstream, revision),
        None => (epoch, rest, "0"),
    }
}

/// Compare an upstream version or revision fragment.
///
/// Alternates between maximal non-digit runs (compared character-wise with
/// `~` sorting below end-of-string, which sorts below letters, which sort
/// below everything else) and maximal digit runs (compared numerically,
/// leading zeros ignored).
fn compare_fragment(a: &str, b: &str) -> Ordering {
    let mut a = a.as_bytes();
    let mut b = b.as_bytes();

    loop {
        if a.is_empty() && b.is_empty() {
            return Ordering::Equal;
        }

        let a_len = nondigit_run(a);
        let b_len = nondigit_run(b);
        match compare_nondigit_runs(&a[..a_len], &b[..b_len]) {
            Ordering::Equal => {}
            ord => return ord,
        }
        a = &a[a_len..];
        b = &b[b_len..];

        let a_len = digit_run(a);
        let b_len = digit_run(b);
        match compare_digit_runs(&a[..a_len], &b[..b_len]) {
            Ordering::Equal => {}
            ord => return ord,
        }
        a = &a[a_len..];
        b = &b[b_len..];
    }
}

fn nondigit_run(s: &[u8]) -> usize {
    s.iter()
        .position(|c| c.is_ascii_digit())
        .unwrap_or(s.len())
}

fn digit_run(s: &[u8]) -> usize {
    s.iter()
        .position(|c| !c.is_ascii_digit())
        .unwrap_or(s.len())
}

/// Sort weight of one character inside a non-digit run.
///
/// `~` sorts below everything including the end of the run (weight 0),
/// letters sort below all other characters.
fn char_weight(c: u8) -> i32 {
    if c == b'~' {
        -1
    } else if c.is_ascii_alphabetic() {
        i32::from(c)
    } else {
        i32::from(c) + 256
    }
}

fn compare_nondigit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let longest = a.len().max(b.len());
    for i in 0..longest {
        let wa = a.get(i).map_or(0, |&c| char_weight(c));
        let wb = b.get(i).map_or(0, |&c| char_weight(c));
        match wa.cmp(&wb) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Numeric comparison of two digit runs; an empty run counts as 0.
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[start..]
}

/// NewType wrapper giving a version string the Debian total order.
///
/// Useful wherever versions need to live in sorted collections or be
/// sorted with the standard library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebianVersion(String);

impl DebianVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Ord for DebianVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl PartialOrd for DebianVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for DebianVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
