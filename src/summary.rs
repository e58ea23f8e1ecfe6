use crate::error::{DecodeError, Result};
use crate::record::Sample;
use std::fmt;

/// Running totals over a stream of samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub samples: u64,
    pub wins: u64,
    pub draws: u64,
    pub losses: u64,
    pub min_score: i16,
    pub max_score: i16,
    pub score_sum: i64,
    pub max_ply: u16,
    pub promotions: u64,
    pub with_en_passant: u64,
    pub corrupt: u64,
    pub truncated: u64,
}

impl DatasetSummary {
    pub fn zero() -> Self {
        Self {
            samples: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            min_score: i16::MAX,
            max_score: i16::MIN,
            score_sum: 0,
            max_ply: 0,
            promotions: 0,
            with_en_passant: 0,
            corrupt: 0,
            truncated: 0,
        }
    }

    pub fn add(&mut self, sample: &Sample) {
        self.samples += 1;
        match sample.result.signum() {
            1 => self.wins += 1,
            0 => self.draws += 1,
            _ => self.losses += 1,
        }
        self.min_score = self.min_score.min(sample.score);
        self.max_score = self.max_score.max(sample.score);
        self.score_sum += i64::from(sample.score);
        self.max_ply = self.max_ply.max(sample.ply);
        if sample.mv.is_promotion() {
            self.promotions += 1;
        }
        if sample.board.en_passant().is_some() {
            self.with_en_passant += 1;
        }
    }

    /// Count a decode outcome: good samples are added, errors are tallied.
    /// I/O errors are handed back to the caller.
    pub fn record(&mut self, outcome: Result<Sample>) -> Result<()> {
        match outcome {
            Ok(sample) => self.add(&sample),
            Err(DecodeError::CorruptEncoding { .. }) => self.corrupt += 1,
            Err(DecodeError::TruncatedRecord { .. }) => self.truncated += 1,
            Err(e @ DecodeError::Io(_)) => return Err(e),
        }
        Ok(())
    }

    pub fn merge(&mut self, o: &DatasetSummary) {
        self.samples += o.samples;
        self.wins += o.wins;
        self.draws += o.draws;
        self.losses += o.losses;
        self.min_score = self.min_score.min(o.min_score);
        self.max_score = self.max_score.max(o.max_score);
        self.score_sum += o.score_sum;
        self.max_ply = self.max_ply.max(o.max_ply);
        self.promotions += o.promotions;
        self.with_en_passant += o.with_en_passant;
        self.corrupt += o.corrupt;
        self.truncated += o.truncated;
    }

    pub fn mean_score(&self) -> Option<f64> {
        if self.samples == 0 {
            None
        } else {
            Some(self.score_sum as f64 / self.samples as f64)
        }
    }
}

impl Default for DatasetSummary {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "samples        {}", self.samples)?;
        writeln!(
            f,
            "wins/draws/losses {} / {} / {}",
            self.wins, self.draws, self.losses
        )?;
        match self.mean_score() {
            Some(mean) => writeln!(
                f,
                "score          min {} max {} mean {:.2}",
                self.min_score, self.max_score, mean
            )?,
            None => writeln!(f, "score          -")?,
        }
        writeln!(f, "max ply        {}", self.max_ply)?;
        writeln!(f, "promotions     {}", self.promotions)?;
        writeln!(f, "en passant     {}", self.with_en_passant)?;
        writeln!(f, "corrupt        {}", self.corrupt)?;
        write!(f, "truncated      {}", self.truncated)
    }
}
