use crate::domain::{Mode, Player};

/// Sort players by descending score for `mode`.
///
/// Tie-break: players with equal scores keep their input order, so an
/// API that already sends a sorted list is never reshuffled. No secondary
/// key (such as name) is applied. NaN scores sort last.
pub fn rank(players: &[Player], mode: Mode) -> Vec<Player> {
    let mut indexed: Vec<(usize, f64, &Player)> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (i, sortable(p.score_for(mode)), p))
        .collect();

    indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    indexed.into_iter().map(|(_, _, p)| p.clone()).collect()
}

fn sortable(score: f64) -> f64 {
    if score.is_nan() { f64::NEG_INFINITY } else { score }
}

/// Keep players whose name contains `term`, ignoring case. A blank term keeps everyone.
pub fn filter_by_search(players: &[Player], term: &str) -> Vec<Player> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return players.to_vec();
    }
    players
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModeResult, PlayerId};
    use std::collections::BTreeMap;

    fn player(id: &str, name: &str, points: f64) -> Player {
        Player {
            id: PlayerId::from(id),
            name: name.to_string(),
            premium: false,
            points,
            mode_points: None,
            modes: BTreeMap::new(),
        }
    }

    fn with_sword(mut p: Player, points: f64) -> Player {
        p.modes.insert(
            "Sword".to_string(),
            ModeResult {
                tier: Some(1),
                tier_display: None,
                points: Some(points),
            },
        );
        p
    }

    fn ids(players: &[Player]) -> Vec<&str> {
        players.iter().map(|p| p.id.0.as_str()).collect()
    }

    #[test]
    fn overall_sorts_descending_by_points() {
        let players = vec![player("a", "A", 10.0), player("b", "B", 300.0), player("c", "C", 55.0)];
        let ranked = rank(&players, Mode::Overall);
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn ranking_is_a_sorted_permutation() {
        let players: Vec<Player> = [5.0, 1.0, 9.0, 5.0, 0.0, 9.0, 3.0]
            .iter()
            .enumerate()
            .map(|(i, pts)| player(&i.to_string(), "p", *pts))
            .collect();
        let ranked = rank(&players, Mode::Overall);

        assert_eq!(ranked.len(), players.len());
        for p in &players {
            assert!(ranked.contains(p));
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].points >= pair[1].points);
        }
    }

    #[test]
    fn ties_keep_input_order() {
        let players = vec![player("x", "X", 50.0), player("y", "Y", 80.0), player("z", "Z", 50.0)];
        assert_eq!(ids(&rank(&players, Mode::Overall)), vec!["y", "x", "z"]);

        let reversed = vec![player("z", "Z", 50.0), player("x", "X", 50.0)];
        assert_eq!(ids(&rank(&reversed, Mode::Overall)), vec!["z", "x"]);
    }

    #[test]
    fn discipline_ranks_by_its_own_score() {
        let players = vec![
            with_sword(player("a", "A", 400.0), 5.0),
            with_sword(player("b", "B", 20.0), 60.0),
            player("c", "C", 30.0),
        ];
        assert_eq!(ids(&rank(&players, Mode::Sword)), vec!["b", "c", "a"]);
    }

    #[test]
    fn nan_scores_sort_last() {
        let players = vec![player("n", "N", f64::NAN), player("a", "A", 1.0)];
        assert_eq!(ids(&rank(&players, Mode::Overall)), vec!["a", "n"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let players = vec![player("1", "DragonSlayer", 0.0), player("2", "knight", 0.0), player("3", "dragonfly", 0.0)];
        assert_eq!(ids(&filter_by_search(&players, "DRAGON")), vec!["1", "3"]);
        assert_eq!(ids(&filter_by_search(&players, "  nig ")), vec!["2"]);
        assert!(filter_by_search(&players, "zzz").is_empty());
    }

    #[test]
    fn blank_search_is_identity() {
        let players = vec![player("1", "a", 1.0), player("2", "b", 2.0)];
        assert_eq!(filter_by_search(&players, ""), players);
        assert_eq!(filter_by_search(&players, "   "), players);
    }
}
