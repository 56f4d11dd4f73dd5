//! Static generation and starter tables.
//!
//! These are consumed, not computed: adding a game generation means
//! extending GENERATIONS and STARTERS by hand.

use super::types::Generation;

/// Generation ID ranges, ascending and contiguous over 1..=721.
pub static GENERATIONS: &[Generation] = &[
    Generation::new(1, 1, 151),
    Generation::new(2, 152, 251),
    Generation::new(3, 252, 386),
    Generation::new(4, 387, 493),
    Generation::new(5, 494, 649),
    Generation::new(6, 650, 721),
];

/// Species offered as an initial player choice, plus Pikachu (Yellow).
pub static STARTERS: &[u32] = &[
    1, 4, 7, 25, 152, 155, 158, 252, 255, 258, 387, 390, 393, 495, 498, 501, 650, 653, 656,
];

/// Generation number a species ID belongs to, by static range membership
pub fn generation_of(id: u32) -> Option<u8> {
    GENERATIONS.iter().find(|g| g.contains(id)).map(|g| g.gen)
}

pub fn get_generation(gen: u8) -> Option<&'static Generation> {
    GENERATIONS.iter().find(|g| g.gen == gen)
}

pub fn is_starter(id: u32) -> bool {
    STARTERS.contains(&id)
}

/// Number of species IDs covered by all declared generations
pub fn total_species() -> usize {
    GENERATIONS.iter().map(|g| g.count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_ascending_and_contiguous() {
        for pair in GENERATIONS.windows(2) {
            assert_eq!(
                pair[1].first,
                pair[0].last + 1,
                "gap between gen {} and gen {}",
                pair[0].gen,
                pair[1].gen
            );
            assert_eq!(pair[1].gen, pair[0].gen + 1);
        }
        assert_eq!(GENERATIONS.first().unwrap().first, 1);
        assert_eq!(GENERATIONS.last().unwrap().last, 721);
    }

    #[test]
    fn total_matches_declared_id_space() {
        assert_eq!(total_species(), 721);
    }

    #[test]
    fn generation_lookup_at_range_boundaries() {
        assert_eq!(generation_of(1), Some(1));
        assert_eq!(generation_of(151), Some(1));
        assert_eq!(generation_of(152), Some(2));
        assert_eq!(generation_of(721), Some(6));
        assert_eq!(generation_of(0), None);
        assert_eq!(generation_of(722), None);
    }

    #[test]
    fn every_starter_has_a_generation() {
        for &id in STARTERS {
            assert!(
                generation_of(id).is_some(),
                "starter #{} outside declared ranges",
                id
            );
        }
        assert!(is_starter(1));
        assert!(is_starter(656));
        assert!(!is_starter(2));
    }

    #[test]
    fn get_generation_by_number() {
        assert_eq!(get_generation(3).map(|g| g.first), Some(252));
        assert_eq!(get_generation(7), None);
    }
}
