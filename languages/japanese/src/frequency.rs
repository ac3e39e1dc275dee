use std::collections::HashMap;
use std::path::Path;

use wakaru_core::language::FrequencyProvider;

/// Japanese word frequency provider.
///
/// Consumed by the layers above the scanner (a match is ranked after it is
/// produced); the recognition core itself never reads frequency data.
pub struct JapaneseFrequency {
    frequencies: HashMap<String, u32>,
}

impl JapaneseFrequency {
    /// Create empty frequency database
    pub fn new() -> Self {
        Self {
            frequencies: HashMap::new(),
        }
    }

    /// Create with an embedded seed of very common words
    pub fn with_defaults() -> Self {
        let mut frequencies = HashMap::new();

        // Top of a corpus-derived frequency list, dictionary forms only
        let common_words = [
            ("ある", 1), ("いる", 2), ("する", 3), ("なる", 4), ("れる", 5),
            ("できる", 6), ("この", 7), ("ため", 8), ("その", 9), ("よう", 10),
            ("また", 11), ("もの", 12), ("これ", 13), ("それ", 14), ("とき", 15),
            ("思う", 16), ("行う", 17), ("考える", 18), ("示す", 19), ("用いる", 20),
            ("言う", 21), ("大きい", 22), ("多い", 23), ("新しい", 24), ("良い", 25),
            ("高い", 26), ("長い", 27), ("強い", 28), ("少ない", 29), ("古い", 30),
            ("見る", 31), ("来る", 32), ("持つ", 33), ("使う", 34), ("出る", 35),
            ("取る", 36), ("分かる", 37), ("行く", 38), ("入る", 39), ("作る", 40),
            ("聞く", 41), ("話す", 42), ("読む", 43), ("書く", 44), ("食べる", 45),
            ("日本", 46), ("飲む", 47), ("買う", 48), ("好き", 49), ("猫", 50),
        ];

        for (word, rank) in common_words {
            frequencies.insert(word.to_string(), rank);
        }

        Self { frequencies }
    }

    /// Load frequency data from TSV file (word\trank format)
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let mut frequencies = HashMap::new();

        for line in content.lines() {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 2 {
                if let Ok(rank) = parts[1].parse::<u32>() {
                    frequencies.insert(parts[0].to_string(), rank);
                }
            }
        }

        tracing::info!("Loaded {} frequency entries from {}", frequencies.len(), path.display());
        Ok(Self { frequencies })
    }

    /// Get frequency rank for a word (lower = more common)
    pub fn get_rank(&self, word: &str) -> Option<u32> {
        self.frequencies.get(word).copied()
    }

    /// Bucket a word by how common it is
    pub fn get_level(&self, word: &str) -> FrequencyLevel {
        match self.get_rank(word) {
            Some(rank) if rank <= 1000 => FrequencyLevel::VeryCommon,
            Some(rank) if rank <= 5000 => FrequencyLevel::Common,
            Some(rank) if rank <= 10000 => FrequencyLevel::Uncommon,
            Some(_) => FrequencyLevel::Rare,
            None => FrequencyLevel::Unknown,
        }
    }
}

impl Default for JapaneseFrequency {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyProvider for JapaneseFrequency {
    fn frequency(&self, word: &str) -> Option<u32> {
        self.get_rank(word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyLevel {
    VeryCommon,
    Common,
    Uncommon,
    Rare,
    Unknown,
}

impl FrequencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyLevel::VeryCommon => "Very Common",
            FrequencyLevel::Common => "Common",
            FrequencyLevel::Uncommon => "Uncommon",
            FrequencyLevel::Rare => "Rare",
            FrequencyLevel::Unknown => "Unknown",
        }
    }
}
