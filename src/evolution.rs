//! Resolves a species' direct successors from an evolution-chain tree.

use anyhow::{Context, Result};

use crate::api::types::ChainLink;
use crate::model::EvolutionEdge;

/// Walk the chain and collect one edge per immediate child of the node
/// whose species name matches.
///
/// The walk is an explicit-stack depth-first traversal: matching a node
/// stops the descent on that path, every other branch is still searched.
/// A species that is a terminal node, or absent from the tree entirely,
/// yields an empty vector rather than an error.
pub fn direct_successors(root: &ChainLink, species_name: &str) -> Result<Vec<EvolutionEdge>> {
    let mut edges = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.species.name == species_name {
            for child in &node.evolves_to {
                edges.push(edge(child)?);
            }
        } else {
            // Reverse push so children are visited in listed order
            for child in node.evolves_to.iter().rev() {
                stack.push(child);
            }
        }
    }

    Ok(edges)
}

/// Edge for one direct child. Only the first-listed evolution detail
/// counts; alternative triggers for the same edge are discarded.
fn edge(child: &ChainLink) -> Result<EvolutionEdge> {
    let to_species_id = child
        .species
        .id()
        .with_context(|| format!("no numeric id in species URL: {}", child.species.url))?;

    let detail = child.evolution_details.first();

    Ok(EvolutionEdge {
        to_species_id,
        method: detail
            .and_then(|d| d.trigger.as_ref())
            .map(|t| t.name.clone()),
        detail: detail.and_then(|d| d.min_level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EvolutionDetail, NamedResource};

    fn link(id: u32, name: &str, details: Vec<EvolutionDetail>, children: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: NamedResource {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
            },
            evolution_details: details,
            evolves_to: children,
        }
    }

    fn level_up(min_level: u32) -> EvolutionDetail {
        EvolutionDetail {
            trigger: Some(NamedResource {
                name: "level-up".to_string(),
                url: "https://pokeapi.co/api/v2/evolution-trigger/1/".to_string(),
            }),
            min_level: Some(min_level),
        }
    }

    fn use_item() -> EvolutionDetail {
        EvolutionDetail {
            trigger: Some(NamedResource {
                name: "use-item".to_string(),
                url: "https://pokeapi.co/api/v2/evolution-trigger/3/".to_string(),
            }),
            min_level: None,
        }
    }

    fn linear_chain() -> ChainLink {
        // caterpie -> metapod -> butterfree
        link(
            10,
            "caterpie",
            vec![],
            vec![link(
                11,
                "metapod",
                vec![level_up(7)],
                vec![link(12, "butterfree", vec![level_up(10)], vec![])],
            )],
        )
    }

    #[test]
    fn root_of_linear_chain_has_one_edge() {
        let edges = direct_successors(&linear_chain(), "caterpie").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to_species_id, 11);
        assert_eq!(edges[0].method.as_deref(), Some("level-up"));
        assert_eq!(edges[0].detail, Some(7));
    }

    #[test]
    fn middle_of_linear_chain_skips_indirect_descendants() {
        let edges = direct_successors(&linear_chain(), "metapod").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to_species_id, 12);
    }

    #[test]
    fn terminal_node_has_no_edges() {
        let edges = direct_successors(&linear_chain(), "butterfree").unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn species_not_in_tree_degrades_to_empty() {
        let edges = direct_successors(&linear_chain(), "pidgey").unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn branching_chain_preserves_child_order() {
        let chain = link(
            133,
            "eevee",
            vec![],
            vec![
                link(134, "vaporeon", vec![use_item()], vec![]),
                link(135, "jolteon", vec![use_item()], vec![]),
                link(136, "flareon", vec![use_item()], vec![]),
            ],
        );

        let edges = direct_successors(&chain, "eevee").unwrap();
        let targets: Vec<u32> = edges.iter().map(|e| e.to_species_id).collect();
        assert_eq!(targets, vec![134, 135, 136]);
    }

    #[test]
    fn first_listed_detail_wins() {
        let chain = link(
            1,
            "a",
            vec![],
            vec![link(2, "b", vec![level_up(16), use_item()], vec![])],
        );

        let edges = direct_successors(&chain, "a").unwrap();
        assert_eq!(edges[0].method.as_deref(), Some("level-up"));
        assert_eq!(edges[0].detail, Some(16));
    }

    #[test]
    fn empty_detail_list_gives_null_method_and_detail() {
        let chain = link(1, "a", vec![], vec![link(2, "b", vec![], vec![])]);

        let edges = direct_successors(&chain, "a").unwrap();
        assert_eq!(edges[0].method, None);
        assert_eq!(edges[0].detail, None);
    }

    #[test]
    fn malformed_child_url_is_an_error() {
        let mut chain = link(1, "a", vec![], vec![link(2, "b", vec![], vec![])]);
        chain.evolves_to[0].species.url = "https://pokeapi.co/api/v2/pokemon-species/".to_string();

        assert!(direct_successors(&chain, "a").is_err());
    }
}
