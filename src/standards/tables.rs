//! Literal band and inverse-letter tables for the built-in standards.
//!
//! These numbers are the authoritative scales; nothing here is derived. Band
//! lists are ordered by descending threshold so the classifier can take the
//! first match.

use crate::domain::StandardId;
use crate::standards::{GradeBand, GradingStandard};

const fn band(min_score: u8, points: f64, label: &'static str) -> GradeBand {
    GradeBand {
        min_score,
        points,
        label,
    }
}

pub const NG: GradingStandard = GradingStandard {
    id: StandardId::Ng,
    display_name: "Nigeria (5.0)",
    max_points: 5.0,
    bands: &[
        band(70, 5.0, "A"),
        band(60, 4.0, "B"),
        band(50, 3.0, "C"),
        band(45, 2.0, "D"),
        band(40, 1.0, "E"),
        band(0, 0.0, "F"),
    ],
    letters: &[
        ("A", 70),
        ("B", 60),
        ("C", 50),
        ("D", 45),
        ("E", 40),
        ("F", 0),
    ],
};

pub const UI_SPECIAL: GradingStandard = GradingStandard {
    id: StandardId::UiSpecial,
    display_name: "Special / Postgraduate (7.0)",
    max_points: 7.0,
    bands: &[
        band(70, 7.0, "A"),
        band(65, 6.0, "A-"),
        band(60, 5.0, "B+"),
        band(55, 4.0, "B"),
        band(50, 3.0, "B-"),
        band(45, 2.0, "C+"),
        band(40, 1.0, "C"),
        band(0, 0.0, "F"),
    ],
    letters: &[
        ("A", 70),
        ("A-", 65),
        ("B+", 60),
        ("B", 55),
        ("B-", 50),
        ("C+", 45),
        ("C", 40),
        ("F", 0),
    ],
};

pub const POLY: GradingStandard = GradingStandard {
    id: StandardId::Poly,
    display_name: "Polytechnic (4.0)",
    max_points: 4.0,
    bands: &[
        band(75, 4.00, "A"),
        band(70, 3.50, "AB"),
        band(65, 3.25, "B"),
        band(60, 3.00, "BC"),
        band(55, 2.75, "C"),
        band(50, 2.50, "CD"),
        band(45, 2.25, "D"),
        band(40, 2.00, "E"),
        band(0, 0.0, "F"),
    ],
    letters: &[
        ("A", 75),
        ("AB", 70),
        ("B", 65),
        ("BC", 60),
        ("C", 55),
        ("CD", 50),
        ("D", 45),
        ("E", 40),
        ("F", 0),
    ],
};

pub const UK: GradingStandard = GradingStandard {
    id: StandardId::Uk,
    display_name: "United Kingdom (4.0)",
    max_points: 4.0,
    bands: &[
        band(70, 4.00, "1st"),
        band(60, 3.33, "2:1"),
        band(50, 2.67, "2:2"),
        band(40, 2.00, "3rd"),
        band(0, 0.0, "Fail"),
    ],
    // Representative midpoints, not the forward thresholds above.
    letters: &[("1ST", 75), ("2:1", 65), ("2:2", 55), ("3RD", 45), ("FAIL", 0)],
};

pub const US: GradingStandard = GradingStandard {
    id: StandardId::Us,
    display_name: "United States (4.0)",
    max_points: 4.0,
    bands: &[
        band(90, 4.0, "A"),
        band(80, 3.0, "B"),
        band(70, 2.0, "C"),
        band(60, 1.0, "D"),
        band(0, 0.0, "F"),
    ],
    letters: &[("A", 90), ("B", 80), ("C", 70), ("D", 60), ("F", 0)],
};

pub const IN: GradingStandard = GradingStandard {
    id: StandardId::In,
    display_name: "India (10.0)",
    max_points: 10.0,
    bands: &[
        band(80, 10.0, "O"),
        band(70, 9.0, "A+"),
        band(60, 8.0, "A"),
        band(55, 7.0, "B+"),
        band(50, 6.0, "B"),
        band(45, 5.0, "C"),
        band(40, 4.0, "P"),
        band(0, 0.0, "F"),
    ],
    letters: &[
        ("O", 80),
        ("A+", 70),
        ("A", 60),
        ("B+", 55),
        ("B", 50),
        ("C", 45),
        ("P", 40),
        ("F", 0),
    ],
};

/// Catalog order is the order standards are offered in menus.
pub const ALL: [GradingStandard; 6] = [NG, UI_SPECIAL, POLY, UK, US, IN];
