use {
    crate::{ANGLE_KEY_COUNT, MatchResult},
    std::sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    },
};

// bits 0..6 per joint, then the aggregate, then "a result has been published"
const CORRECT_BIT: u8 = 1 << ANGLE_KEY_COUNT;
const PRESENT_BIT: u8 = 1 << (ANGLE_KEY_COUNT + 1);

/// The most recent [`MatchResult`], shared between the frame producer and pollers.
///
/// The whole result lives in one atomic byte, so a reader never sees per-joint
/// verdicts from one frame next to the aggregate of another.
#[derive(Clone, Debug, Default)]
pub struct LastVerdict {
    bits: Arc<AtomicU8>,
}

fn encode(result: &MatchResult) -> u8 {
    let joints = result
        .verdicts()
        .filter(|(_, ok)| *ok)
        .fold(0u8, |bits, (key, _)| bits | (1 << key.index()));
    let correct = if result.is_correct() { CORRECT_BIT } else { 0 };
    joints | correct | PRESENT_BIT
}

fn decode(bits: u8) -> Option<MatchResult> {
    if bits & PRESENT_BIT == 0 {
        return None;
    }
    let mut verdicts = [false; ANGLE_KEY_COUNT];
    for (i, verdict) in verdicts.iter_mut().enumerate() {
        *verdict = bits & (1 << i) != 0;
    }
    Some(MatchResult::from_verdicts(verdicts))
}

impl LastVerdict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the retained result in one atomic store.
    pub fn publish(&self, result: &MatchResult) {
        self.bits.store(encode(result), Ordering::Release);
    }

    /// The retained result, or `None` before the first frame.
    pub fn load(&self) -> Option<MatchResult> {
        decode(self.bits.load(Ordering::Acquire))
    }

    /// Last aggregate verdict; `false` before the first frame.
    pub fn is_correct(&self) -> bool {
        self.bits.load(Ordering::Acquire) & CORRECT_BIT != 0
    }

    /// Forget the retained result, e.g. when moving to the next pose.
    pub fn clear(&self) {
        self.bits.store(0, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AngleKey;

    #[test]
    fn test_encode_decode_preserves_each_joint() {
        let mut verdicts = [true; ANGLE_KEY_COUNT];
        verdicts[AngleKey::RightShoulder.index()] = false;
        let result = MatchResult::from_verdicts(verdicts);
        let bits = encode(&result);
        assert_eq!(bits & CORRECT_BIT, 0);
        assert_eq!(decode(bits), Some(result));
    }

    #[test]
    fn test_all_pass_sets_correct_bit() {
        let bits = encode(&MatchResult::from_verdicts([true; ANGLE_KEY_COUNT]));
        assert_eq!(bits, 0b1111_1111);
    }

    #[test]
    fn test_zero_is_absent() {
        assert_eq!(decode(0), None);
    }
}
