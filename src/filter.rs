use anyhow::{bail, Result};

use crate::dex::{get_generation, Generation, GENERATIONS};

/// Resolves which generations to process based on include/exclude filters
pub fn resolve_generations(
    include: Option<Vec<u8>>,
    exclude: Option<Vec<u8>>,
) -> Result<Vec<&'static Generation>> {
    match (include, exclude) {
        (Some(_), Some(_)) => {
            bail!("Cannot use both --gens and --skip-gens at the same time");
        }
        (Some(include_list), None) => {
            let mut selected: Vec<&'static Generation> = Vec::new();
            for gen in include_list {
                let Some(generation) = get_generation(gen) else {
                    bail!("Unknown generation: {}", gen);
                };
                if !selected.iter().any(|g| g.gen == gen) {
                    selected.push(generation);
                }
            }
            // Processing order is always the declared table order
            selected.sort_by_key(|g| g.gen);
            Ok(selected)
        }
        (None, Some(exclude_list)) => {
            for gen in &exclude_list {
                if get_generation(*gen).is_none() {
                    bail!("Unknown generation: {}", gen);
                }
            }
            Ok(GENERATIONS
                .iter()
                .filter(|g| !exclude_list.contains(&g.gen))
                .collect())
        }
        (None, None) => Ok(GENERATIONS.iter().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_selects_all_generations() {
        let selected = resolve_generations(None, None).unwrap();
        assert_eq!(selected.len(), 6);
        assert_eq!(selected[0].gen, 1);
        assert_eq!(selected[5].gen, 6);
    }

    #[test]
    fn include_filter_deduplicates_and_orders() {
        let selected = resolve_generations(Some(vec![3, 1, 3]), None).unwrap();
        let gens: Vec<u8> = selected.iter().map(|g| g.gen).collect();
        assert_eq!(gens, vec![1, 3]);
    }

    #[test]
    fn exclude_filter_keeps_the_rest() {
        let selected = resolve_generations(None, Some(vec![5, 6])).unwrap();
        let gens: Vec<u8> = selected.iter().map(|g| g.gen).collect();
        assert_eq!(gens, vec![1, 2, 3, 4]);
    }

    #[test]
    fn both_filters_conflict() {
        assert!(resolve_generations(Some(vec![1]), Some(vec![2])).is_err());
    }

    #[test]
    fn unknown_generation_is_rejected() {
        assert!(resolve_generations(Some(vec![7]), None).is_err());
        assert!(resolve_generations(None, Some(vec![0])).is_err());
    }
}
