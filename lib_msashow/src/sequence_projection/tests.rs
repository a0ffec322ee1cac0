use lib_msalign::{
    ensemble::{Structure, StructureEnsemble},
    index_types::{BlockIndex, ResidueIndex, StructureRow},
    multiple_alignment::{Block, MultipleAlignment},
    translation::{FallbackPolicy, ResidueCodeTable},
};

use crate::error::Error;
use crate::sequence_projection::ensemble_labels;

use super::{
    SequenceProjection,
    index_types::{SequenceColumn, StructureColumn},
};

fn structure(label: &str, residue_names: &[&str]) -> Structure {
    Structure::new(
        label,
        residue_names
            .iter()
            .enumerate()
            .map(|(number, name)| lib_msalign::residue::Residue::new(*name, number as i64 + 1))
            .collect(),
    )
}

fn indices(row: &[Option<usize>]) -> Vec<Option<ResidueIndex>> {
    row.iter().map(|index| index.map(ResidueIndex::from)).collect()
}

/// Row 0 renders as `ARNDCQEGH`, row 1 as `LKMF`.
fn two_structure_ensemble() -> StructureEnsemble {
    StructureEnsemble::new([
        structure(
            "ref",
            &[
                "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS",
            ],
        ),
        structure("q", &["LEU", "LYS", "MET", "PHE"]),
    ])
}

fn alignment(blocks: Vec<Block>) -> MultipleAlignment {
    MultipleAlignment::new(two_structure_ensemble(), blocks).unwrap()
}

fn project(alignment: &MultipleAlignment) -> SequenceProjection {
    SequenceProjection::new(alignment, &ResidueCodeTable::default()).unwrap()
}

fn map_entries(projection: &SequenceProjection) -> Vec<Option<StructureColumn>> {
    projection.column_map().iter().collect()
}

fn aligned(column: usize) -> Option<StructureColumn> {
    Some(StructureColumn::from(column))
}

#[test]
fn a_single_block_renders_without_unaligned_columns() {
    let alignment = alignment(vec![Block::new([
        indices(&[Some(0), None, Some(1)]),
        indices(&[Some(0), Some(1), Some(2)]),
    ])]);
    let projection = project(&alignment);

    assert_eq!(projection.row(StructureRow::from(0)), Some("A-R"));
    assert_eq!(projection.row(StructureRow::from(1)), Some("LKM"));
    assert_eq!(
        map_entries(&projection),
        vec![aligned(0), aligned(1), aligned(2)]
    );
}

#[test]
fn blocks_are_separated_by_a_gap_in_all_rows() {
    let alignment = alignment(vec![
        Block::new([indices(&[Some(0)]), indices(&[Some(0)])]),
        Block::new([indices(&[Some(5)]), indices(&[Some(2)])]),
    ]);
    let projection = project(&alignment);

    // The jump from residue 0 to residue 5 in row 0 does not cascade: the
    // per-row position tracking starts over with each block.
    assert_eq!(projection.row(StructureRow::from(0)), Some("A-Q"));
    assert_eq!(projection.row(StructureRow::from(1)), Some("L-M"));
    assert_eq!(
        map_entries(&projection),
        vec![aligned(0), None, aligned(1)]
    );
}

#[test]
fn insertions_are_emitted_as_unaligned_columns() {
    let alignment = alignment(vec![Block::new([
        indices(&[Some(5), Some(8)]),
        indices(&[Some(0), Some(1)]),
    ])]);
    let projection = project(&alignment);

    // Row 0 has residues 6 and 7 between its two aligned residues. They are
    // emitted one extra column at a time before the second aligned column.
    assert_eq!(projection.row(StructureRow::from(0)), Some("QEGH"));
    assert_eq!(projection.row(StructureRow::from(1)), Some("L--K"));
    assert_eq!(
        map_entries(&projection),
        vec![aligned(0), None, None, aligned(1)]
    );
}

#[test]
fn a_fully_gapped_column_still_occupies_a_column() {
    let alignment = alignment(vec![Block::new([
        indices(&[Some(0), None]),
        indices(&[Some(0), None]),
    ])]);
    let projection = project(&alignment);

    assert_eq!(projection.row(StructureRow::from(0)), Some("A-"));
    assert_eq!(projection.row(StructureRow::from(1)), Some("L-"));
    assert_eq!(map_entries(&projection), vec![aligned(0), aligned(1)]);
}

#[test]
fn an_empty_block_contributes_only_its_separator() {
    let alignment = alignment(vec![
        Block::new([indices(&[Some(0)]), indices(&[Some(0)])]),
        Block::new([indices(&[]), indices(&[])]),
        Block::new([indices(&[Some(1)]), indices(&[Some(1)])]),
    ]);
    let projection = project(&alignment);

    assert_eq!(projection.row(StructureRow::from(0)), Some("A--R"));
    assert_eq!(projection.row(StructureRow::from(1)), Some("L--K"));
    assert_eq!(
        map_entries(&projection),
        vec![aligned(0), None, None, aligned(1)]
    );
}

fn composite_alignment() -> MultipleAlignment {
    alignment(vec![
        Block::new([
            indices(&[Some(0), None]),
            indices(&[Some(0), Some(1)]),
        ]),
        Block::new([
            indices(&[Some(3), Some(6)]),
            indices(&[Some(2), Some(3)]),
        ]),
    ])
}

#[test]
fn every_row_is_as_long_as_the_column_map() {
    let alignment = composite_alignment();
    let projection = project(&alignment);

    for row in projection.rows().iter_values() {
        assert_eq!(row.chars().count(), projection.column_count());
    }
}

#[test]
fn projecting_twice_yields_identical_output() {
    let alignment = composite_alignment();
    let first = project(&alignment);
    let second = project(&alignment);

    for row in (0..first.row_count()).map(StructureRow::from) {
        assert_eq!(first.row(row), second.row(row));
    }
    assert_eq!(map_entries(&first), map_entries(&second));
}

#[test]
fn aligned_entries_strictly_increase() {
    let alignment = composite_alignment();
    let projection = project(&alignment);

    let aligned: Vec<_> = projection.column_map().iter().flatten().collect();
    assert!(!aligned.is_empty());
    assert!(aligned.windows(2).all(|window| window[0] < window[1]));
}

#[test]
fn unaligned_columns_yield_none_from_both_queries() {
    let alignment = composite_alignment();
    let projection = project(&alignment);

    for column in projection.column_map().columns() {
        let aligned = projection.column_map().is_aligned(column).unwrap();
        assert_eq!(
            projection
                .block_for_column(&alignment, column)
                .unwrap()
                .is_some(),
            aligned
        );

        if !aligned {
            for row in (0..projection.row_count()).map(StructureRow::from) {
                assert_eq!(
                    projection
                        .residue_for_column(&alignment, row, column)
                        .unwrap(),
                    None
                );
            }
        }
    }
}

#[test]
fn residues_resolve_through_the_column_map() {
    let alignment = alignment(vec![Block::new([
        indices(&[Some(0), None, Some(1)]),
        indices(&[Some(0), Some(1), Some(2)]),
    ])]);
    let projection = project(&alignment);

    let residue = projection
        .residue_for_column(&alignment, StructureRow::from(0), SequenceColumn::from(0))
        .unwrap()
        .unwrap();
    assert_eq!(residue.name(), "ALA");

    // A gap within a block resolves to no residue for that row only.
    assert_eq!(
        projection
            .residue_for_column(&alignment, StructureRow::from(0), SequenceColumn::from(1))
            .unwrap(),
        None
    );
    let residue = projection
        .residue_for_column(&alignment, StructureRow::from(1), SequenceColumn::from(1))
        .unwrap()
        .unwrap();
    assert_eq!(residue.name(), "LYS");
}

#[test]
fn blocks_locate_through_the_column_map() {
    let alignment = composite_alignment();
    let projection = project(&alignment);

    assert_eq!(
        projection
            .block_for_column(&alignment, SequenceColumn::from(0))
            .unwrap(),
        Some(BlockIndex::from(0))
    );
    // Column 2 is the separator between the blocks.
    assert_eq!(
        projection
            .block_for_column(&alignment, SequenceColumn::from(2))
            .unwrap(),
        None
    );
    assert_eq!(
        projection
            .block_for_column(&alignment, SequenceColumn::from(3))
            .unwrap(),
        Some(BlockIndex::from(1))
    );
}

#[test]
fn resolved_residues_belong_to_the_located_block() {
    let alignment = composite_alignment();
    let projection = project(&alignment);

    for column in projection.column_map().columns() {
        let Some(block_index) = projection.block_for_column(&alignment, column).unwrap() else {
            continue;
        };
        let block = alignment.block(block_index).unwrap();

        for row in (0..projection.row_count()).map(StructureRow::from) {
            let Some(residue) = projection
                .residue_for_column(&alignment, row, column)
                .unwrap()
            else {
                continue;
            };

            let ensemble = alignment.ensemble();
            assert!(block.row(row).flatten().any(|index| {
                ensemble.residue(row, index).unwrap() == residue
            }));
        }
    }
}

#[test]
fn out_of_bounds_queries_are_rejected() {
    let alignment = composite_alignment();
    let projection = project(&alignment);

    assert!(matches!(
        projection
            .residue_for_column(&alignment, StructureRow::from(0), SequenceColumn::from(99))
            .unwrap_err(),
        Error::ColumnOutOfBounds {
            column: 99,
            column_count: 7,
        }
    ));
    assert!(matches!(
        projection
            .residue_for_column(&alignment, StructureRow::from(5), SequenceColumn::from(0))
            .unwrap_err(),
        Error::Model(lib_msalign::error::Error::RowOutOfBounds {
            row: 5,
            row_count: 2,
        })
    ));
    assert!(matches!(
        projection
            .block_for_column(&alignment, SequenceColumn::from(99))
            .unwrap_err(),
        Error::ColumnOutOfBounds { .. }
    ));
}

#[test]
fn rows_without_column_map_matches_the_projection() {
    let alignment = composite_alignment();
    let projection = project(&alignment);
    let rows =
        SequenceProjection::rows_without_column_map(&alignment, &ResidueCodeTable::default())
            .unwrap();

    for row in (0..projection.row_count()).map(StructureRow::from) {
        assert_eq!(projection.row(row), Some(rows[row].as_str()));
    }
}

#[test]
fn unknown_residue_names_follow_the_translator_policy() {
    let ensemble = StructureEnsemble::new([
        structure("ref", &["ALA", "MSE"]),
        structure("q", &["LEU", "LYS"]),
    ]);
    let alignment = MultipleAlignment::new(
        ensemble,
        vec![Block::new([
            indices(&[Some(0), Some(1)]),
            indices(&[Some(0), Some(1)]),
        ])],
    )
    .unwrap();

    let projection = SequenceProjection::new(&alignment, &ResidueCodeTable::default()).unwrap();
    assert_eq!(projection.row(StructureRow::from(0)), Some("AX"));

    assert!(matches!(
        SequenceProjection::new(&alignment, &ResidueCodeTable::new(FallbackPolicy::Fail)),
        Err(Error::Model(lib_msalign::error::Error::UnknownResidueName { name })) if name == "MSE"
    ));
}

#[test]
fn render_pads_labels_to_equal_width() {
    let alignment = alignment(vec![Block::new([
        indices(&[Some(0), None, Some(1)]),
        indices(&[Some(0), Some(1), Some(2)]),
    ])]);
    let projection = project(&alignment);

    let mut output = Vec::new();
    projection
        .render(&mut output, ensemble_labels(alignment.ensemble()))
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, "ref: A-R\nq:   LKM\n");
}
