use rand::Rng;
use rand::seq::index;

/// Number of quotes shown on the quotes page unless configured otherwise.
pub const DEFAULT_QUOTE_COUNT: usize = 3;

const WELLNESS_TIPS: [&str; 5] = [
    "💧 Stay hydrated: drink at least 8 glasses of water today.",
    "🚶 Take a short walk and stretch your body.",
    "🧘 Breathe deeply. Inhale calmness, exhale stress.",
    "🍎 Eat something healthy for your body and mind.",
    "😴 Take short breaks and rest your eyes from screens.",
];

const QUOTES: [&str; 5] = [
    "🌈 Every day may not be good, but there's something good in every day.",
    "💪 Small steps every day lead to big changes.",
    "🌸 Healing takes time, and that's perfectly okay.",
    "☀️ You are stronger than you think and braver than you feel.",
    "💖 Take your medicine, take your rest, take care of you.",
];

/// Pick `k` distinct items from `items` in no particular order.
///
/// Asking for more items than exist returns all of them.
pub fn pick_distinct<'a, T, R>(items: &'a [T], k: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let amount = k.min(items.len());
    index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

/// Static reading material for the wellness and quotes pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentService {
    quote_count: usize,
}

impl Default for ContentService {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            quote_count: DEFAULT_QUOTE_COUNT,
        }
    }

    /// Set how many quotes are shown per visit, clamped to `1..=pool size`.
    #[must_use]
    pub fn with_quote_count(mut self, count: usize) -> Self {
        self.quote_count = count.clamp(1, QUOTES.len());
        self
    }

    #[must_use]
    pub fn quote_count(&self) -> usize {
        self.quote_count
    }

    #[must_use]
    pub fn wellness_tips(&self) -> &'static [&'static str] {
        &WELLNESS_TIPS
    }

    #[must_use]
    pub fn all_quotes(&self) -> &'static [&'static str] {
        &QUOTES
    }

    /// Fresh random selection of quotes; repeated calls need not agree.
    #[must_use]
    pub fn pick_quotes(&self) -> Vec<&'static str> {
        self.pick_quotes_with(&mut rand::rng())
    }

    pub fn pick_quotes_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&'static str> {
        pick_distinct(&QUOTES, self.quote_count, rng)
            .into_iter()
            .copied()
            .collect()
    }
}
