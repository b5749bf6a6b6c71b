//! Conjunction grouping and sign-distance aspect detection.
//!
//! Conjunctions: grahas sharing a rashi, grouped in chart iteration order.
//! Aspects: for each i<j pair, the sign distance from the first graha to
//! the second decides the aspect. Distance 6 is a 7th-house opposition for
//! any pair; Mars, Jupiter, and Saturn additionally cast their special
//! aspects when they are the first graha of the pair. The rule categories
//! are checked independently — a pair may report more than one aspect.

use jataka_vedic::{ALL_RASHIS, Graha};

use crate::chart_types::{Aspect, AspectKind, Conjunction, Position};

/// Group grahas by rashi and report every group with at least 2 members.
///
/// Groups appear in order of their first member; members keep chart
/// iteration order, so no group can contain a duplicate graha.
pub fn find_conjunctions(positions: &[Position; 9]) -> Vec<Conjunction> {
    let mut groups: Vec<(u8, Vec<Graha>)> = Vec::new();
    for p in positions {
        match groups.iter_mut().find(|(idx, _)| *idx == p.rashi_index) {
            Some((_, members)) => members.push(p.graha),
            None => groups.push((p.rashi_index, vec![p.graha])),
        }
    }

    groups
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(rashi_index, grahas)| {
            let rashi = ALL_RASHIS[rashi_index as usize];
            let names: Vec<&str> = grahas.iter().map(|g| g.english_name()).collect();
            let description = format!("{} in {}", names.join(", "), rashi.name());
            Conjunction {
                rashi,
                grahas,
                description,
            }
        })
        .collect()
}

/// Special-aspect sign distances for the first graha of a pair.
///
/// Mars casts 4th/8th (distances 3, 7), Jupiter 5th/9th (4, 8), Saturn
/// 3rd/10th (2, 9). All other grahas cast no special aspects.
const fn special_distances(graha: Graha) -> Option<[u8; 2]> {
    match graha {
        Graha::Mangal => Some([3, 7]),
        Graha::Guru => Some([4, 8]),
        Graha::Shani => Some([2, 9]),
        _ => None,
    }
}

/// Detect aspects over every i<j pair in chart iteration order.
///
/// Each report is directional (source aspects target) even though the
/// underlying opposition relation is symmetric. House labels in the
/// description are `distance + 1`.
pub fn find_aspects(positions: &[Position; 9]) -> Vec<Aspect> {
    let mut aspects = Vec::new();

    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let source = &positions[i];
            let target = &positions[j];
            let distance = (target.rashi_index + 12 - source.rashi_index) % 12;

            if distance == 6 {
                aspects.push(Aspect {
                    source: source.graha,
                    target: target.graha,
                    kind: AspectKind::Opposition,
                    sign_distance: distance,
                    description: format!(
                        "{} aspects {} (7th house)",
                        source.graha.english_name(),
                        target.graha.english_name()
                    ),
                });
            }

            if let Some(distances) = special_distances(source.graha) {
                if distances.contains(&distance) {
                    aspects.push(Aspect {
                        source: source.graha,
                        target: target.graha,
                        kind: AspectKind::Special,
                        sign_distance: distance,
                        description: format!(
                            "{} aspects {} ({}th house)",
                            source.graha.english_name(),
                            target.graha.english_name(),
                            distance + 1
                        ),
                    });
                }
            }
        }
    }

    aspects
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_vedic::{ALL_GRAHAS, nakshatra_from_longitude, rashi_from_longitude};

    /// Build a position table from 9 rashi indices (graha order fixed).
    fn positions_from_rashis(rashi_indices: [u8; 9]) -> [Position; 9] {
        let mut i = 0;
        ALL_GRAHAS.map(|graha| {
            let lon = rashi_indices[i] as f64 * 30.0 + 15.0;
            let rashi = rashi_from_longitude(lon);
            let nakshatra = nakshatra_from_longitude(lon);
            i += 1;
            Position {
                graha,
                longitude: lon,
                rashi: rashi.rashi,
                rashi_index: rashi.rashi_index,
                nakshatra: nakshatra.nakshatra,
                nakshatra_index: nakshatra.nakshatra_index,
                pada: nakshatra.pada,
                dignity: None,
            }
        })
    }

    #[test]
    fn no_conjunctions_when_all_signs_distinct() {
        let positions = positions_from_rashis([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(find_conjunctions(&positions).is_empty());
    }

    #[test]
    fn pair_conjunction_detected() {
        // Sun and Mercury both in Makara (9)
        let positions = positions_from_rashis([9, 1, 9, 3, 4, 5, 6, 7, 8]);
        let conjunctions = find_conjunctions(&positions);
        assert_eq!(conjunctions.len(), 1);
        assert_eq!(conjunctions[0].grahas, vec![Graha::Surya, Graha::Buddh]);
        assert_eq!(conjunctions[0].description, "Sun, Mercury in Makara");
    }

    #[test]
    fn groups_in_first_member_order() {
        // Venus+Saturn in 2, Sun+Moon in 5: Sun's group appears first.
        let positions = positions_from_rashis([5, 5, 0, 2, 1, 3, 2, 7, 8]);
        let conjunctions = find_conjunctions(&positions);
        assert_eq!(conjunctions.len(), 2);
        assert_eq!(conjunctions[0].grahas, vec![Graha::Surya, Graha::Chandra]);
        assert_eq!(conjunctions[1].grahas, vec![Graha::Shukra, Graha::Shani]);
    }

    #[test]
    fn conjunction_members_unique_and_at_least_two() {
        let positions = positions_from_rashis([4, 4, 4, 4, 4, 4, 4, 4, 4]);
        let conjunctions = find_conjunctions(&positions);
        assert_eq!(conjunctions.len(), 1);
        assert_eq!(conjunctions[0].grahas.len(), 9);
        let mut seen = conjunctions[0].grahas.clone();
        seen.dedup();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn opposition_for_any_pair_at_distance_6() {
        // Sun in 0, Moon in 6, everyone else placed so no other pair
        // lands at sign distance 6.
        let positions = positions_from_rashis([0, 6, 1, 2, 3, 4, 5, 1, 3]);
        let aspects = find_aspects(&positions);
        let oppositions: Vec<_> = aspects
            .iter()
            .filter(|a| a.kind == AspectKind::Opposition)
            .collect();
        assert_eq!(oppositions.len(), 1);
        assert_eq!(oppositions[0].source, Graha::Surya);
        assert_eq!(oppositions[0].target, Graha::Chandra);
        assert_eq!(oppositions[0].sign_distance, 6);
        assert_eq!(oppositions[0].description, "Sun aspects Moon (7th house)");
    }

    #[test]
    fn no_opposition_at_other_distances() {
        for d in [0u8, 1, 2, 3, 4, 5, 7, 8, 9, 10, 11] {
            let positions = positions_from_rashis([0, d, 1, 2, 3, 4, 5, 8, 10]);
            let aspects = find_aspects(&positions);
            assert!(
                !aspects
                    .iter()
                    .any(|a| a.source == Graha::Surya
                        && a.target == Graha::Chandra
                        && a.kind == AspectKind::Opposition),
                "unexpected opposition at distance {d}"
            );
        }
    }

    #[test]
    fn mars_special_aspects() {
        // Mars in 0; Jupiter at distance 3, Saturn at distance 7.
        let positions = positions_from_rashis([1, 2, 4, 5, 0, 3, 7, 9, 11]);
        let aspects = find_aspects(&positions);
        let specials: Vec<_> = aspects
            .iter()
            .filter(|a| a.source == Graha::Mangal && a.kind == AspectKind::Special)
            .collect();
        assert_eq!(specials.len(), 2);
        assert_eq!(specials[0].target, Graha::Guru);
        assert_eq!(specials[0].description, "Mars aspects Jupiter (4th house)");
        assert_eq!(specials[1].target, Graha::Shani);
        assert_eq!(specials[1].description, "Mars aspects Saturn (8th house)");
    }

    #[test]
    fn jupiter_special_distances() {
        // Jupiter in 0; Saturn at distance 4, Rahu at distance 8.
        let positions = positions_from_rashis([1, 2, 3, 5, 6, 0, 4, 8, 2]);
        let aspects = find_aspects(&positions);
        let specials: Vec<_> = aspects
            .iter()
            .filter(|a| a.source == Graha::Guru && a.kind == AspectKind::Special)
            .collect();
        assert_eq!(specials.len(), 2);
        assert_eq!(specials[0].description, "Jupiter aspects Saturn (5th house)");
        assert_eq!(specials[1].description, "Jupiter aspects Rahu (9th house)");
    }

    #[test]
    fn saturn_special_distances() {
        // Saturn in 0; Rahu at distance 2, Ketu at distance 9.
        let positions = positions_from_rashis([1, 3, 4, 5, 6, 7, 0, 2, 9]);
        let aspects = find_aspects(&positions);
        let specials: Vec<_> = aspects
            .iter()
            .filter(|a| a.source == Graha::Shani && a.kind == AspectKind::Special)
            .collect();
        assert_eq!(specials.len(), 2);
        assert_eq!(specials[0].description, "Saturn aspects Rahu (3th house)");
        assert_eq!(specials[1].description, "Saturn aspects Ketu (10th house)");
    }

    #[test]
    fn special_only_when_planet_is_first_of_pair() {
        // Sun in 3 before Mars in 0: the Sun-Mars pair has distance 9 from
        // the Sun's side; Mars is not the source, so no Mars special fires.
        let positions = positions_from_rashis([3, 6, 7, 8, 0, 10, 11, 1, 2]);
        let aspects = find_aspects(&positions);
        assert!(
            !aspects
                .iter()
                .any(|a| a.source == Graha::Mangal && a.target == Graha::Surya)
        );
    }

    #[test]
    fn opposition_and_special_are_independent() {
        // Mars in 0, Saturn at distance 6 (opposition), Jupiter at distance 3
        // (Mars 4th-house special). Both categories must fire; neither
        // suppresses the other for the same source.
        let positions = positions_from_rashis([8, 4, 9, 10, 0, 3, 6, 1, 7]);
        let aspects = find_aspects(&positions);
        let from_mars: Vec<_> = aspects.iter().filter(|a| a.source == Graha::Mangal).collect();
        assert!(
            from_mars
                .iter()
                .any(|a| a.kind == AspectKind::Opposition && a.target == Graha::Shani)
        );
        assert!(
            from_mars
                .iter()
                .any(|a| a.kind == AspectKind::Special && a.target == Graha::Guru)
        );
    }
}
