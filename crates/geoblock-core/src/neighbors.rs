// crates/geoblock-core/src/neighbors.rs

//! The eight cells surrounding a geocode.
//!
//! Only `n`, `s`, `e` and `w` are resolved from the input; each diagonal is
//! one further east/west step from the already resolved `n` or `s`.

use crate::adjacency::adjacent;
use crate::direction::{Compass, Direction};
use crate::error::Result;
use crate::geocode::Geocode;
use serde::{Deserialize, Serialize};

/// Labeled neighborhood of a geocode. Serializes as a map keyed
/// `n`, `ne`, `e`, `se`, `s`, `sw`, `w`, `nw`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbors {
    pub n: Geocode,
    pub ne: Geocode,
    pub e: Geocode,
    pub se: Geocode,
    pub s: Geocode,
    pub sw: Geocode,
    pub w: Geocode,
    pub nw: Geocode,
}

impl Neighbors {
    pub fn get(&self, at: Compass) -> &Geocode {
        match at {
            Compass::N => &self.n,
            Compass::NE => &self.ne,
            Compass::E => &self.e,
            Compass::SE => &self.se,
            Compass::S => &self.s,
            Compass::SW => &self.sw,
            Compass::W => &self.w,
            Compass::NW => &self.nw,
        }
    }

    /// Labeled cells clockwise from north.
    pub fn iter(&self) -> impl Iterator<Item = (Compass, &Geocode)> + '_ {
        Compass::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// `[n, ne, e, se, s, sw, w, nw]`
    pub fn to_array(&self) -> [Geocode; 8] {
        Compass::ALL.map(|c| self.get(c).clone())
    }

    pub fn into_array(self) -> [Geocode; 8] {
        [
            self.n, self.ne, self.e, self.se, self.s, self.sw, self.w, self.nw,
        ]
    }
}

/// Computes the labeled neighborhood of `geocode`.
///
/// No validation beyond what [`adjacent`] does; check
/// [`Geocode::is_valid_and_has_precision`] first.
pub fn neighbors_labeled(geocode: &str) -> Result<Neighbors> {
    let step = |g: &str, d: Direction| adjacent(g, d).map(Geocode::from_canonical);

    let n = step(geocode, Direction::North)?;
    let s = step(geocode, Direction::South)?;
    Ok(Neighbors {
        ne: step(n.as_str(), Direction::East)?,
        e: step(geocode, Direction::East)?,
        se: step(s.as_str(), Direction::East)?,
        sw: step(s.as_str(), Direction::West)?,
        w: step(geocode, Direction::West)?,
        nw: step(n.as_str(), Direction::West)?,
        n,
        s,
    })
}

/// Unlabeled neighborhood in the fixed order `[n, ne, e, se, s, sw, w, nw]`.
pub fn neighbors(geocode: &str) -> Result<[Geocode; 8]> {
    neighbors_labeled(geocode).map(Neighbors::into_array)
}

/// Edge-sharing neighbors only, ordered `[n, e, s, w]`.
pub fn cardinal_neighbors(geocode: &str) -> Result<[Geocode; 4]> {
    Ok([
        Geocode::from_canonical(adjacent(geocode, Direction::North)?),
        Geocode::from_canonical(adjacent(geocode, Direction::East)?),
        Geocode::from_canonical(adjacent(geocode, Direction::South)?),
        Geocode::from_canonical(adjacent(geocode, Direction::West)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;

    fn adj(g: &str, d: Direction) -> Geocode {
        Geocode::new(adjacent(g, d).unwrap())
    }

    #[test]
    fn test_diagonals_compose_from_cardinals() {
        let got = neighbors("b").unwrap();
        let expected = [
            Geocode::new("0"),
            adj("0", Direction::East),
            Geocode::new("c"),
            adj("8", Direction::East),
            Geocode::new("8"),
            adj("8", Direction::West),
            Geocode::new("z"),
            adj("0", Direction::West),
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn test_labeled_matches_ordered() {
        let labeled = neighbors_labeled("u33dc").unwrap();
        assert_eq!(labeled.to_array(), neighbors("u33dc").unwrap());
        assert_eq!(labeled.get(Compass::N).as_str(), "u33e1");
        assert_eq!(labeled.get(Compass::NE).as_str(), "u33e4");
        assert_eq!(labeled.get(Compass::SW).as_str(), "u33d8");
        assert_eq!(labeled.get(Compass::NW).as_str(), "u33e0");
    }

    #[test]
    fn test_iter_is_clockwise() {
        let labeled = neighbors_labeled("gcpuuz").unwrap();
        let cells: Vec<_> = labeled.iter().map(|(c, g)| (c.label(), g.as_str())).collect();
        assert_eq!(
            cells,
            [
                ("n", "gcpvhb"),
                ("ne", "gcpvj0"),
                ("e", "gcpuvp"),
                ("se", "gcpuvn"),
                ("s", "gcpuuy"),
                ("sw", "gcpuuw"),
                ("w", "gcpuux"),
                ("nw", "gcpvh8"),
            ]
        );
    }

    #[test]
    fn test_cardinal_subset() {
        let [n, e, s, w] = cardinal_neighbors("gcpuuz").unwrap();
        let all = neighbors_labeled("gcpuuz").unwrap();
        assert_eq!((n, e, s, w), (all.n, all.e, all.s, all.w));
    }

    #[test]
    fn test_serializes_as_labeled_map() {
        let labeled = neighbors_labeled("b").unwrap();
        let json = serde_json::to_value(&labeled).unwrap();
        assert_eq!(json["n"], "0");
        assert_eq!(json["e"], "c");
        assert_eq!(json["s"], "8");
        assert_eq!(json["w"], "z");
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_propagates_resolver_failure() {
        assert!(matches!(neighbors(""), Err(GeoError::EmptyGeocode)));
        assert!(matches!(
            neighbors_labeled("lo"),
            Err(GeoError::InvalidSymbol { .. })
        ));
    }
}
