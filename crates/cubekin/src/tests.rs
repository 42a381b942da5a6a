use std::ops::ControlFlow;

use cubekin_notation::{format_moves, parse_moves};
use itertools::Itertools;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::sequence::expand;
use crate::*;

const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

fn moves(s: &str) -> Vec<Move> {
    parse_moves(s).collect::<Result<_, _>>().expect("bad test moves")
}

fn encode(lattice: &Lattice) -> String {
    lattice
        .encode(&SolverAlphabet::default())
        .expect("error encoding cube")
}

fn cube_after(s: &str) -> Lattice {
    let mut lattice = Lattice::new();
    lattice.apply_all(moves(s)).expect("error applying moves");
    lattice
}

#[test]
fn test_solved_cube() {
    let lattice = Lattice::new();
    assert!(lattice.is_solved());
    assert_eq!(Ok(()), lattice.check_bijection());
    assert_eq!(lattice, Lattice::default());

    let s = encode(&lattice);
    assert_eq!(SOLVED, s);
    let runs = s.chars().chunk_by(|&c| c);
    let run_lengths = runs.into_iter().map(|(_, run)| run.count()).collect_vec();
    assert_eq!(vec![9; 6], run_lengths);

    let center = lattice.get([0, 0, 0]).expect("center");
    assert!(center.is_interior());
    for cubelet in lattice.cubelets() {
        assert_eq!(cubelet.home(), cubelet.position());
        assert_eq!(
            cubelet.position().boundary_count(),
            cubelet.colored_face_count(),
        );
    }
}

#[test]
fn test_solved_initials() {
    assert_eq!(
        "yyyyyyyyygggggggggrrrrrrrrrwwwwwwwwwbbbbbbbbbooooooooo",
        Lattice::new()
            .encode(&SolverAlphabet::initials())
            .expect("error encoding cube"),
    );
}

#[test]
fn test_single_moves() {
    let expected = [
        ("U", "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"),
        ("R", "UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"),
        ("F", "UUUUUULLLURRURRURRFFFFFFFFFRRRDDDDDDLLDLLDLLDBBBBBBBBB"),
        ("D", "UUUUUUUUURRRRRRFFFFFFFFFLLLDDDDDDDDDLLLLLLBBBBBBBBBRRR"),
        ("L", "BUUBUUBUURRRRRRRRRUFFUFFUFFFDDFDDFDDLLLLLLLLLBBDBBDBBD"),
        ("B", "RRRUUUUUURRDRRDRRDFFFFFFFFFDDDDDDLLLULLULLULLBBBBBBBBB"),
    ];
    for (mv, facelets) in expected {
        assert_eq!(facelets, encode(&cube_after(mv)), "after {mv}");
    }
}

#[test]
fn test_u_move_only_cycles_top_rows() {
    let before = encode(&Lattice::new());
    let after = encode(&cube_after("U"));
    let groups = |s: &str| -> Vec<String> {
        s.chars()
            .chunks(9)
            .into_iter()
            .map(|c| c.collect())
            .collect()
    };
    let (before, after) = (groups(&before), groups(&after));
    // U, R, F, D, L, B
    assert_eq!(before[0], after[0]);
    assert_eq!(before[3], after[3]);
    for (face, from) in [(1, 5), (2, 1), (4, 2), (5, 4)] {
        assert_eq!(before[from][..3], after[face][..3]);
        assert_eq!(before[face][3..], after[face][3..]);
    }
}

#[test]
fn test_half_turn_sequence() {
    assert_eq!(
        "UDDDUULLRDLLURLURRFFFFFBBBBRRLDDUUUDRRDRLDLLUBBFBBFBFF",
        encode(&cube_after("R2 U2 F B2")),
    );
}

#[test]
fn test_commutator_order() {
    let sexy = moves("R U R' U'");
    let mut lattice = Lattice::new();
    for i in 1..=6 {
        lattice.apply_all(sexy.iter().copied()).expect("error applying");
        assert_eq!(i == 6, lattice.is_solved(), "after {i} repetitions");
    }
    assert_eq!(Lattice::new(), lattice);
}

#[test]
fn test_slices() {
    let lattice = Lattice::new();
    for axis in Axis::ALL {
        for layer in [-1, 1] {
            let slice = lattice.slice(axis, layer).expect("valid slice");
            assert_eq!(SLICE_LEN, slice.len());
            assert!(slice.iter().all(|c| c.position().get(axis) == layer));
        }
        assert_eq!(
            Err(CubeError::InvalidSlice { axis, layer: 0 }),
            lattice.slice(axis, 0),
        );
        assert_eq!(
            Err(CubeError::InvalidSlice { axis, layer: 2 }),
            lattice.slice(axis, 2),
        );
    }
    let turn = LayerTurn {
        axis: Axis::X,
        layer: 0,
        quarter_turns: 1,
    };
    let mut lattice = Lattice::new();
    assert_eq!(
        Err(CubeError::InvalidSlice {
            axis: Axis::X,
            layer: 0,
        }),
        lattice.apply_turn(turn),
    );
    assert_eq!(Lattice::new(), lattice);
}

#[test]
fn test_lookup_errors() {
    let lattice = Lattice::new();
    assert_eq!(
        Err(CubeError::OutOfRange([1, 2, 0])),
        lattice.get([1, 2, 0]),
    );
    assert_eq!(
        Err(CubeError::OutOfRange([-5, 0, 0])),
        lattice.get([-5, 0, 0]),
    );
    assert!(lattice.get([-1, -1, -1]).is_ok());
}

#[test]
fn test_unknown_move_has_no_effect() {
    let mut lattice = cube_after("R U");
    let before = lattice.clone();
    let err = lattice.apply_str("X2").expect_err("unknown move");
    assert!(matches!(err, CubeError::UnknownMove(_)));
    assert_eq!(before, lattice);

    assert_eq!(SLICE_LEN, lattice.apply_str("F'").expect("valid").len());
    assert_ne!(before, lattice);
}

#[test]
fn test_notation_table() {
    let turn = |s: &str| LayerTurn::from(moves(s)[0]);
    assert_eq!(
        LayerTurn {
            axis: Axis::Z,
            layer: 1,
            quarter_turns: 1,
        },
        turn("U"),
    );
    assert_eq!(
        LayerTurn {
            axis: Axis::Y,
            layer: -1,
            quarter_turns: 1,
        },
        turn("F'"),
    );
    assert_eq!(
        LayerTurn {
            axis: Axis::X,
            layer: -1,
            quarter_turns: -2,
        },
        turn("L2"),
    );
    for family in Family::ALL {
        let a = rotation::family_turn(family);
        let b = rotation::family_turn(family.opposite());
        assert_eq!(a.axis, b.axis);
        assert_eq!(a.layer, -b.layer);
        // Opposite faces turn in opposite directions about the shared axis.
        assert_eq!(a.quarter_turns, -b.quarter_turns);
    }
}

#[test]
fn test_affected_cubelets() {
    let mut lattice = Lattice::new();
    let affected = lattice.apply(Move::cw(Family::R)).expect("valid");
    assert_eq!(SLICE_LEN, affected.len());
    for cubelet in &affected {
        assert_eq!(1, cubelet.position().get(Axis::X));
        assert_eq!(cubelet, lattice.cubelet(cubelet.position()));
        // The R sticker stays on the R face.
        assert_eq!(Some(Color::Green), cubelet.color_on_face(Face::Right));
    }
    // Center of the R face rotates in place.
    let center = lattice.get([1, 0, 0]).expect("face center");
    assert_eq!(center.home(), center.position());
}

#[test]
fn test_cubelet_orientation() {
    let home = Coord::new(1, -1, 1).expect("corner");
    let mut cubelet = Cubelet::solved(home);
    assert_eq!(3, cubelet.colored_face_count());
    assert_eq!(Some(Color::Yellow), cubelet.color_on_face(Face::Up));
    assert_eq!(Some(Color::Green), cubelet.color_on_face(Face::Right));
    assert_eq!(Some(Color::Red), cubelet.color_on_face(Face::Front));
    assert_eq!(None, cubelet.color_on_face(Face::Down));

    // Quarter turn about Z cycles the side faces and keeps Up and Down.
    cubelet.rotate_orientation(Axis::Z, 1);
    assert_eq!(Some(Color::Yellow), cubelet.color_on_face(Face::Up));
    assert_eq!(Some(Color::Green), cubelet.color_on_face(Face::Front));
    assert_eq!(Some(Color::Red), cubelet.color_on_face(Face::Left));
    assert_eq!(None, cubelet.color_on_face(Face::Right));
    assert_eq!(home, cubelet.position());

    // Half turn swaps opposite pairs.
    cubelet.rotate_orientation(Axis::Z, 2);
    assert_eq!(Some(Color::Green), cubelet.color_on_face(Face::Back));
    assert_eq!(Some(Color::Red), cubelet.color_on_face(Face::Right));

    cubelet.rotate_orientation(Axis::Z, 1);
    assert_eq!(Cubelet::solved(home), cubelet);

    cubelet.set_color_on_face(Face::Down, Some(Color::Blue));
    assert_eq!(Some(Color::Blue), cubelet.color_on_face(Face::Down));
    assert_eq!(4, cubelet.colored_face_count());
}

#[test]
fn test_corrupted_lattice() {
    let mut lattice = Lattice::new();
    lattice.cubelets.swap(0, 1);
    assert!(matches!(
        lattice.check_bijection(),
        Err(CubeError::InvariantViolation(_)),
    ));

    let mut lattice = Lattice::new();
    let pos = Coord::new(0, 0, 1).expect("face center");
    lattice.cubelets[pos.slot()].set_color_on_face(Face::Up, None);
    assert_eq!(
        Err(CubeError::UntranslatableColor(None)),
        lattice.encode(&SolverAlphabet::default()),
    );
    assert!(!lattice.is_solved());
}

#[test]
fn test_solver_alphabet() {
    let err = SolverAlphabet::new([(Color::Red, 'F'), (Color::Blue, 'F')])
        .expect_err("duplicate letter");
    assert_eq!(CubeError::AlphabetNotInjective(Color::Blue, Color::Red, 'F'), err);

    let partial = SolverAlphabet::new([(Color::Yellow, 'U')]).expect("injective");
    assert_eq!(Ok('U'), partial.letter(Color::Yellow));
    assert_eq!(
        Err(CubeError::UntranslatableColor(Some(Color::Green))),
        Lattice::new().encode(&partial),
    );

    let custom = SolverAlphabet::new(Color::ALL.into_iter().zip("012345".chars()))
        .expect("injective");
    assert_eq!(
        "333333333111111111555555555000000000444444444222222222",
        Lattice::new().encode(&custom).expect("error encoding"),
    );
}

#[test]
fn test_expand() {
    assert_eq!(
        "R R U' F D' D' B B",
        format_moves(expand(moves("R2 U' F D2' B2"))),
    );
    assert_eq!(0, expand(Vec::new()).count());
}

#[test]
fn test_playback_position() {
    let mut playback = Playback::new(moves("U2 R'"));
    assert_eq!(0, playback.position());

    let steps = playback.by_ref().collect_vec();
    assert_eq!(3, playback.position());
    assert_eq!(None, playback.next());

    let u2 = Move::double(Family::U);
    let r_prime = Move::ccw(Family::R);
    assert_eq!(
        vec![
            Step {
                index: 0,
                token_index: 0,
                token: u2,
                primitive: Move::cw(Family::U),
                ends_token: false,
            },
            Step {
                index: 1,
                token_index: 0,
                token: u2,
                primitive: Move::cw(Family::U),
                ends_token: true,
            },
            Step {
                index: 2,
                token_index: 1,
                token: r_prime,
                primitive: r_prime,
                ends_token: true,
            },
        ],
        steps,
    );
}

#[test]
fn test_replay_shows_half_turn_midpoint() {
    let mut lattice = Lattice::new();
    let mut seen = vec![];
    let summary = lattice
        .replay(moves("R2"), &mut |step: &Step, affected: &[Cubelet], lattice: &Lattice| {
            assert_eq!(SLICE_LEN, affected.len());
            seen.push((step.index, encode(lattice)));
            ControlFlow::Continue(())
        })
        .expect("error replaying");
    assert_eq!(
        ReplaySummary {
            steps: 2,
            tokens: 1,
            completed: true,
        },
        summary,
    );
    assert_eq!(
        vec![
            (0, encode(&cube_after("R"))),
            (1, encode(&cube_after("R2"))),
        ],
        seen,
    );
}

#[test]
fn test_replay_can_stop_between_steps() {
    let mut lattice = Lattice::new();
    let summary = lattice
        .replay(moves("F2 B L"), &mut |step: &Step, _: &[Cubelet], _: &Lattice| {
            if step.index == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .expect("error replaying");
    assert_eq!(
        ReplaySummary {
            steps: 3,
            tokens: 2,
            completed: false,
        },
        summary,
    );
    assert_eq!(cube_after("F2 B"), lattice);
}

#[test]
fn test_replay_inverse_solves() {
    let scramble = moves("D L2 B' R U2 F' L D' B2 R'");
    let mut lattice = Lattice::new();
    lattice.apply_all(scramble.iter().copied()).expect("error scrambling");
    assert!(!lattice.is_solved());

    let solution = scramble.iter().rev().map(|mv| mv.inverse()).collect_vec();
    let summary = lattice
        .replay(solution, &mut ())
        .expect("error replaying");
    assert!(summary.completed);
    assert_eq!(10, summary.tokens);
    assert_eq!(13, summary.steps);
    assert!(lattice.is_solved());
    assert_eq!(Lattice::new(), lattice);
}

fn arb_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::all().collect_vec())
}

fn arb_lattice() -> impl Strategy<Value = Lattice> {
    prop::collection::vec(arb_move(), 0..30).prop_map(|moves| {
        let mut lattice = Lattice::new();
        lattice.apply_all(moves).expect("error applying moves");
        lattice
    })
}

proptest! {
    #[test]
    fn proptest_inverse_restores(lattice in arb_lattice(), mv in arb_move()) {
        let mut l = lattice.clone();
        l.apply(mv).expect("error applying move");
        l.apply(mv.inverse()).expect("error applying move");
        prop_assert_eq!(lattice, l);
    }

    #[test]
    fn proptest_quarter_turn_order_4(lattice in arb_lattice(), mv in arb_move()) {
        let quarter = mv.quarter_turn();
        let mut l = lattice.clone();
        for i in 1..=4 {
            l.apply(quarter).expect("error applying move");
            prop_assert_eq!(i == 4, lattice == l);
        }

        let double = Move::double(mv.family);
        l.apply(double).expect("error applying move");
        prop_assert_ne!(&lattice, &l);
        l.apply(double).expect("error applying move");
        prop_assert_eq!(lattice, l);
    }

    #[test]
    fn proptest_invariants_hold(lattice in arb_lattice()) {
        prop_assert_eq!(Ok(()), lattice.check_bijection());
        for cubelet in lattice.cubelets() {
            prop_assert_eq!(
                cubelet.position().boundary_count(),
                cubelet.colored_face_count(),
            );
        }
        let colors = facelet::facelet_colors(&lattice).expect("error reading facelets");
        let counts = colors.iter().counts();
        prop_assert_eq!(6, counts.len());
        prop_assert!(counts.values().all(|&n| n == 9));
    }

    #[test]
    fn proptest_double_matches_two_quarters(lattice in arb_lattice(), mv in arb_move()) {
        let mut a = lattice.clone();
        a.apply(Move::double(mv.family)).expect("error applying move");
        let mut b = lattice;
        b.apply_all(expand([Move::double(mv.family)])).expect("error applying moves");
        prop_assert_eq!(a, b);
    }
}
