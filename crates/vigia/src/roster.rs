//! Roster ordering by inferred organizational rank.
//!
//! A [`RankTable`] maps lowercase role keywords to integer ranks and orders
//! personnel records most-senior first. The table is an ordered list, not a
//! map: when a position contains several recognized keywords (for example
//! "Jefe Supervisor"), the entry that appears first in the table decides the
//! rank, so the outcome is deterministic and documented by the table itself.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::records::Employee;

/// Rank assigned when a position is present but matches no keyword.
pub const UNRANKED: u8 = 6;

/// Rank assigned when a record has no position at all.
pub const NO_POSITION: u8 = 10;

/// A single keyword-to-rank mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    /// Lowercase keyword matched by containment against the position.
    pub keyword: String,
    /// Rank assigned on match; lower is more senior.
    pub rank: u8,
}

impl RankEntry {
    /// Create a new entry, lowercasing the keyword.
    #[must_use]
    pub fn new(keyword: impl Into<String>, rank: u8) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            rank,
        }
    }
}

/// An immutable, ordered table of role keywords and their ranks.
///
/// Matching walks the entries in declaration order and the first keyword
/// contained in the lowercased position wins. Construct with
/// [`RankTable::builtin`] for the standard scheme or
/// [`RankTable::with_entries`] to inject an alternative one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    entries: Vec<RankEntry>,
}

impl RankTable {
    /// The built-in keyword table, in evaluation order.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                RankEntry::new("jefe", 1),
                RankEntry::new("gerente", 1),
                RankEntry::new("superintendente", 1),
                RankEntry::new("coordinador", 2),
                RankEntry::new("supervisor", 2),
                RankEntry::new("lider", 3),
                RankEntry::new("lead", 3),
                RankEntry::new("inspector", 4),
                RankEntry::new("asistente", 5),
                RankEntry::new("assistant", 5),
                RankEntry::new("practicante", 9),
                RankEntry::new("intern", 9),
            ],
        }
    }

    /// Build a table from custom entries, preserving their order.
    ///
    /// Keywords are lowercased; blank keywords are dropped.
    #[must_use]
    pub fn with_entries(entries: Vec<RankEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|e| !e.keyword.trim().is_empty())
            .map(|e| RankEntry::new(e.keyword, e.rank))
            .collect();
        Self { entries }
    }

    /// The entries of this table, in evaluation order.
    #[must_use]
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    /// Infer the rank for a free-form position.
    ///
    /// A missing or blank position yields [`NO_POSITION`]; a position that
    /// matches no keyword yields [`UNRANKED`]. Matching is containment of
    /// the keyword in the lowercased position, first table entry wins.
    #[must_use]
    pub fn rank_of(&self, position: Option<&str>) -> u8 {
        let Some(position) = position else {
            return NO_POSITION;
        };
        if position.trim().is_empty() {
            return NO_POSITION;
        }

        let lowered = position.to_lowercase();
        for entry in &self.entries {
            if lowered.contains(&entry.keyword) {
                trace!(position, keyword = %entry.keyword, rank = entry.rank, "rank matched");
                return entry.rank;
            }
        }
        UNRANKED
    }

    /// Infer the rank for an employee record.
    #[must_use]
    pub fn rank_of_employee(&self, employee: &Employee) -> u8 {
        self.rank_of(employee.position.as_deref())
    }

    /// Return a new vector of the given records ordered by rank.
    ///
    /// Ascending rank (most senior first); ties broken by case-insensitive
    /// comparison of `full_name`, then by the raw name so the ordering is
    /// total. The input slice is not mutated, and sorting an already-sorted
    /// sequence yields the same sequence.
    #[must_use]
    pub fn sorted(&self, employees: &[Employee]) -> Vec<Employee> {
        let mut out = employees.to_vec();
        out.sort_by_cached_key(|e| {
            (
                self.rank_of_employee(e),
                e.full_name.to_lowercase(),
                e.full_name.clone(),
            )
        });
        out
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(name: &str, position: Option<&str>) -> Employee {
        Employee::new(name, position)
    }

    #[test]
    fn test_builtin_table_order() {
        let table = RankTable::builtin();
        let keywords: Vec<&str> = table.entries().iter().map(|e| e.keyword.as_str()).collect();

        assert_eq!(keywords[0], "jefe");
        assert_eq!(keywords[3], "coordinador");
        assert_eq!(*keywords.last().unwrap(), "intern");
        assert_eq!(keywords.len(), 12);
    }

    #[test]
    fn test_rank_of_keywords() {
        let table = RankTable::builtin();

        assert_eq!(table.rank_of(Some("Jefe de Planta")), 1);
        assert_eq!(table.rank_of(Some("Gerente General")), 1);
        assert_eq!(table.rank_of(Some("Superintendente de Mina")), 1);
        assert_eq!(table.rank_of(Some("Coordinador SSOMA")), 2);
        assert_eq!(table.rank_of(Some("Supervisor de Turno")), 2);
        assert_eq!(table.rank_of(Some("Lider de Cuadrilla")), 3);
        assert_eq!(table.rank_of(Some("Team Lead")), 3);
        assert_eq!(table.rank_of(Some("Inspector Mecanico")), 4);
        assert_eq!(table.rank_of(Some("Asistente Administrativo")), 5);
        assert_eq!(table.rank_of(Some("Executive Assistant")), 5);
        assert_eq!(table.rank_of(Some("Practicante de Ingenieria")), 9);
        assert_eq!(table.rank_of(Some("Summer Intern")), 9);
    }

    #[test]
    fn test_rank_of_is_case_insensitive() {
        let table = RankTable::builtin();

        assert_eq!(table.rank_of(Some("JEFE DE GUARDIA")), 1);
        assert_eq!(table.rank_of(Some("supervisor")), 2);
        assert_eq!(table.rank_of(Some("InSpEcToR")), 4);
    }

    #[test]
    fn test_rank_of_unmatched_position() {
        let table = RankTable::builtin();

        assert_eq!(table.rank_of(Some("Soldador")), UNRANKED);
        assert_eq!(table.rank_of(Some("Operador de Grúa")), UNRANKED);
    }

    #[test]
    fn test_rank_of_missing_or_blank_position() {
        let table = RankTable::builtin();

        assert_eq!(table.rank_of(None), NO_POSITION);
        assert_eq!(table.rank_of(Some("")), NO_POSITION);
        assert_eq!(table.rank_of(Some("   ")), NO_POSITION);
    }

    #[test]
    fn test_rank_of_first_keyword_wins() {
        let table = RankTable::builtin();

        // "jefe" appears before "supervisor" in the table, so the combined
        // title resolves to rank 1 regardless of word order in the title.
        assert_eq!(table.rank_of(Some("Jefe Supervisor")), 1);
        assert_eq!(table.rank_of(Some("Supervisor Jefe")), 1);
    }

    #[test]
    fn test_rank_of_containment_not_exact_match() {
        let table = RankTable::builtin();

        assert_eq!(table.rank_of(Some("Sub-jefe de almacén")), 1);
        assert_eq!(table.rank_of(Some("inspectores")), 4);
    }

    #[test]
    fn test_sorted_by_rank() {
        let table = RankTable::builtin();
        let input = vec![
            emp("Ana", Some("Supervisor")),
            emp("Beto", Some("Jefe de Planta")),
        ];

        let sorted = table.sorted(&input);
        let names: Vec<&str> = sorted.iter().map(|e| e.full_name.as_str()).collect();

        assert_eq!(names, vec!["Beto", "Ana"]);
    }

    #[test]
    fn test_sorted_tie_break_alphabetical() {
        let table = RankTable::builtin();
        let input = vec![emp("Zoila", None), emp("alberto", None), emp("Mario", None)];

        let sorted = table.sorted(&input);
        let names: Vec<&str> = sorted.iter().map(|e| e.full_name.as_str()).collect();

        // Case-insensitive: "alberto" sorts before "Mario" and "Zoila".
        assert_eq!(names, vec!["alberto", "Mario", "Zoila"]);
    }

    #[test]
    fn test_sorted_full_ladder() {
        let table = RankTable::builtin();
        let input = vec![
            emp("Paula", Some("Practicante")),
            emp("Nora", None),
            emp("Omar", Some("Soldador")),
            emp("Ines", Some("Inspector Electrico")),
            emp("Carla", Some("Coordinadora de Seguridad")),
            emp("Gema", Some("Gerente de Operaciones")),
        ];

        let sorted = table.sorted(&input);
        let names: Vec<&str> = sorted.iter().map(|e| e.full_name.as_str()).collect();

        assert_eq!(names, vec!["Gema", "Carla", "Ines", "Omar", "Paula", "Nora"]);
    }

    #[test]
    fn test_sorted_does_not_mutate_input() {
        let table = RankTable::builtin();
        let input = vec![
            emp("Ana", Some("Supervisor")),
            emp("Beto", Some("Jefe de Planta")),
        ];
        let snapshot = input.clone();

        let _ = table.sorted(&input);

        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_sorted_is_idempotent() {
        let table = RankTable::builtin();
        let input = vec![
            emp("Ana", Some("Supervisor")),
            emp("Beto", Some("Jefe de Planta")),
            emp("Caro", None),
            emp("Dino", Some("Inspector")),
        ];

        let once = table.sorted(&input);
        let twice = table.sorted(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sorted_empty_input() {
        let table = RankTable::builtin();
        assert!(table.sorted(&[]).is_empty());
    }

    #[test]
    fn test_with_entries_custom_scheme() {
        let table = RankTable::with_entries(vec![
            RankEntry::new("capataz", 1),
            RankEntry::new("obrero", 2),
        ]);

        assert_eq!(table.rank_of(Some("Capataz de Obra")), 1);
        assert_eq!(table.rank_of(Some("Obrero")), 2);
        // The built-in keywords are gone in an injected table.
        assert_eq!(table.rank_of(Some("Jefe de Planta")), UNRANKED);
    }

    #[test]
    fn test_with_entries_lowercases_and_drops_blank() {
        let table = RankTable::with_entries(vec![
            RankEntry {
                keyword: "CAPATAZ".to_string(),
                rank: 1,
            },
            RankEntry {
                keyword: "   ".to_string(),
                rank: 3,
            },
        ]);

        assert_eq!(table.entries().len(), 1);
        assert_eq!(table.entries()[0].keyword, "capataz");
    }

    #[test]
    fn test_default_is_builtin() {
        assert_eq!(RankTable::default(), RankTable::builtin());
    }
}
