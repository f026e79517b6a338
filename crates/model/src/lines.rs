use rand::SeedableRng;
use rand::distr::{Alphanumeric, SampleString};
use rand::rngs::SmallRng;

/// Endless source of random alphanumeric lines.
pub struct LineGenerator {
    rng: SmallRng,
    length: usize,
}

impl LineGenerator {
    pub const DEFAULT_LENGTH: usize = 16;

    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Reproducible generator: the same seed yields the same lines.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    fn from_rng(rng: SmallRng) -> Self {
        LineGenerator {
            rng,
            length: Self::DEFAULT_LENGTH,
        }
    }
}

impl Iterator for LineGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(Alphanumeric.sample_string(&mut self.rng, self.length))
    }
}

/// Input arrangement of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Already sorted.
    Best,
    /// Every merge interleaves its two runs completely.
    Worst,
    /// Generator order.
    Random,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Best, Case::Worst, Case::Random];

    pub fn file_name(self) -> &'static str {
        match self {
            Case::Best => "bestCase.txt",
            Case::Worst => "worstCase.txt",
            Case::Random => "randomCase.txt",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Case::Best => "best",
            Case::Worst => "worst",
            Case::Random => "random",
        }
    }
}

impl std::str::FromStr for Case {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(Self::Best),
            "worst" => Ok(Self::Worst),
            "random" => Ok(Self::Random),
            _ => Err("unknown case, expected one of: best, worst, random"),
        }
    }
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reorders `lines` for the given case.
pub fn arrange(case: Case, mut lines: Vec<String>) -> Vec<String> {
    match case {
        Case::Best => {
            lines.sort();
            lines
        }
        Case::Worst => {
            lines.sort();
            unmerge(&lines)
        }
        Case::Random => lines,
    }
}

/// Inverse of a full merge: even positions go to the left run, odd ones to
/// the right run, recursively. The left run gets the extra element, matching
/// a midpoint split of `(low + high) / 2`.
fn unmerge<T: Clone>(sorted: &[T]) -> Vec<T> {
    if sorted.len() <= 1 {
        return sorted.to_vec();
    }

    let left: Vec<T> = sorted.iter().step_by(2).cloned().collect();
    let right: Vec<T> = sorted.iter().skip(1).step_by(2).cloned().collect();

    let mut arranged = unmerge(&left);
    arranged.extend(unmerge(&right));
    arranged
}
