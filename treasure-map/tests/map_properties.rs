use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use treasure_map::{
    Coordinate, Direction, Instruction, RenderConfig, normalize, polygon_area, render,
    total_steps, trace, vertices,
};

const SEEDS: [u64; 6] = [1, 7, 42, 1337, 0x00C0_FFEE, 0xFACE_B00C];

fn random_instructions(seed: u64) -> Vec<Instruction> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let count = rng.gen_range(1..24);
    (0..count)
        .map(|_| {
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            Instruction::new(direction, rng.gen_range(0..7))
        })
        .collect()
}

#[test]
fn path_length_is_one_plus_total_steps() {
    for seed in SEEDS {
        let instructions = random_instructions(seed);
        let path = trace(&instructions);
        let expected = usize::try_from(total_steps(&instructions)).unwrap() + 1;
        assert_eq!(path.len(), expected, "seed {seed}");
        assert_eq!(path.start(), Coordinate::ORIGIN);
        for pair in path.coordinates().windows(2) {
            let (dr, dc) = pair[0].delta_to(pair[1]);
            assert_eq!(dr.abs() + dc.abs(), 1, "seed {seed}: non-unit step");
        }
    }
}

#[test]
fn normalization_anchors_at_zero_and_keeps_shape() {
    for seed in SEEDS {
        let path = trace(&random_instructions(seed));
        let normalized = normalize(&path);
        let shifted = normalized.path().coordinates();

        assert_eq!(shifted.iter().map(|c| c.row).min(), Some(0), "seed {seed}");
        assert_eq!(shifted.iter().map(|c| c.col).min(), Some(0), "seed {seed}");
        assert_eq!(shifted.len(), path.len());

        let original = path.coordinates();
        for i in 0..original.len() {
            for j in (i + 1)..original.len() {
                assert_eq!(
                    original[i].delta_to(original[j]),
                    shifted[i].delta_to(shifted[j]),
                    "seed {seed}: offset between {i} and {j} changed"
                );
            }
            assert_eq!(normalized.to_original(shifted[i]), original[i]);
        }
    }
}

#[test]
fn area_is_translation_invariant() {
    for seed in SEEDS {
        let instructions = random_instructions(seed);
        if total_steps(&instructions) == 0 {
            continue;
        }
        let path = trace(&instructions);
        let normalized = normalize(&path);
        let raw_area = polygon_area(&vertices(&path).unwrap());
        let shifted_area = polygon_area(&vertices(normalized.path()).unwrap());
        assert_eq!(raw_area, shifted_area, "seed {seed}");
    }
}

#[test]
fn rendered_cells_match_normalized_path() {
    for seed in SEEDS {
        let normalized = normalize(&trace(&random_instructions(seed)));
        let grid = render(&normalized, &RenderConfig::default()).unwrap();
        let expected: BTreeSet<Coordinate> = normalized.path().iter().copied().collect();
        assert_eq!(grid.visited_cells(), expected, "seed {seed}");

        let size = normalized.size().unwrap();
        assert_eq!(grid.size(), size);
        let rendered = grid.to_string();
        assert_eq!(rendered.lines().count(), size.height);
        assert!(rendered.lines().all(|line| line.chars().count() == size.width));
    }
}
