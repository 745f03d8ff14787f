use lib::env::Size;
use lib::input::IStr;

use crate::{gear, part_number_sum, solve, Rect, Schematic};

const SAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

#[test]
fn test_sample() {
    let input = IStr::new(SAMPLE.as_bytes(), Size::ZERO);
    assert_eq!(solve(input).unwrap(), (4361, 467835));
}

#[test]
fn test_sample_gears() {
    let schematic = Schematic::from_lines(SAMPLE.lines());

    let found = gear::gears(&schematic)
        .map(|gear| {
            let gear = gear.unwrap();
            (gear.cell.rect.x, gear.cell.rect.y, gear.parts)
        })
        .collect::<Vec<_>>();

    assert_eq!(found, [(3, 1, [467, 35]), (5, 8, [755, 598])]);
}

#[test]
fn test_sample_part_numbers() {
    let schematic = Schematic::from_lines(SAMPLE.lines());

    let parts = schematic
        .part_numbers()
        .map(|cell| cell.token.value())
        .collect::<Vec<_>>();

    assert_eq!(parts, ["467", "35", "633", "617", "592", "755", "664", "598"]);
    assert_eq!(part_number_sum(&schematic).unwrap(), 4361);
}

#[test]
fn test_rows_are_ordered() {
    let schematic = Schematic::from_lines(SAMPLE.lines());

    for (y, row) in schematic.rows().iter().enumerate() {
        for w in row.windows(2) {
            let [a, b] = w else {
                continue;
            };

            assert!(a.rect.x + a.rect.width <= b.rect.x);
        }

        for cell in row {
            assert_eq!(cell.rect.y, y);
            assert_eq!(cell.rect.height, 1);
        }
    }
}

#[test]
fn test_crlf_and_blank_lines() {
    let input = IStr::new(b"2*3\r\n\r\n1.\r\n", Size::ZERO);
    assert_eq!(solve(input).unwrap(), (5, 6));
}

#[test]
fn test_empty() {
    let input = IStr::new(b"", Size::ZERO);
    assert_eq!(solve(input).unwrap(), (0, 0));
}

#[test]
fn test_not_utf8() {
    let input = IStr::new(b"2*3\n\xff*\n", Size::ZERO);
    assert!(solve(input).is_err());
}

#[test]
fn test_whitespace_stops_row() {
    let schematic = Schematic::from_lines(["1*2 3*4", "5.6"]);

    let cells = schematic
        .cells()
        .map(|cell| (cell.token.value(), cell.rect))
        .collect::<Vec<_>>();

    assert_eq!(
        cells,
        [
            ("1", Rect::new(0, 0, 1, 1)),
            ("*", Rect::new(1, 0, 1, 1)),
            ("2", Rect::new(2, 0, 1, 1)),
            ("5", Rect::new(0, 1, 1, 1)),
            ("6", Rect::new(2, 1, 1, 1)),
        ]
    );

    assert_eq!(gear::ratio_sum(&schematic).unwrap(), 0);
}
