//! Property tests for the rover state machine.

use std::sync::Arc;

use marsrover::{Command, Coordinates, Direction, Plateau, Rover, Status};
use proptest::prelude::*;

fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn any_command() -> impl Strategy<Value = Command> {
    prop::sample::select(vec![
        Command::Backward,
        Command::Forward,
        Command::TurnLeft,
        Command::TurnRight,
    ])
}

/// Plateau bounds with a start position inside them.
fn plateau_and_start() -> impl Strategy<Value = (usize, usize, Coordinates)> {
    (0usize..12, 0usize..12).prop_flat_map(|(max_x, max_y)| {
        (Just(max_x), Just(max_y), (0..=max_x, 0..=max_y))
            .prop_map(|(max_x, max_y, (x, y))| (max_x, max_y, Coordinates::new(x, y)))
    })
}

fn open_rover(max_x: usize, max_y: usize, heading: Direction, start: Coordinates) -> Rover {
    Rover::new(Arc::new(Plateau::new(max_x, max_y, [])), heading, start)
}

proptest! {
    #[test]
    fn four_turns_restore_heading(heading in any_direction(), (max_x, max_y, start) in plateau_and_start()) {
        let mut rover = open_rover(max_x, max_y, heading, start);
        for _ in 0..4 {
            rover.turn_left();
        }
        prop_assert_eq!(rover.heading(), heading);
        for _ in 0..4 {
            rover.turn_right();
        }
        prop_assert_eq!(rover.heading(), heading);
        prop_assert_eq!(rover.coordinates(), start);
    }

    #[test]
    fn turns_are_mutual_inverses(heading in any_direction()) {
        let mut rover = open_rover(5, 5, heading, Coordinates::new(1, 2));
        rover.turn_right();
        rover.turn_left();
        prop_assert_eq!(rover.heading(), heading);
        rover.turn_left();
        rover.turn_right();
        prop_assert_eq!(rover.heading(), heading);
    }

    #[test]
    fn moves_stay_in_bounds(
        (max_x, max_y, start) in plateau_and_start(),
        heading in any_direction(),
        commands in prop::collection::vec(any_command(), 0..64),
    ) {
        let mut rover = open_rover(max_x, max_y, heading, start);
        let executed = rover.accept_commands(&commands);
        prop_assert_eq!(executed, commands.len());
        prop_assert!(rover.plateau().in_bounds(rover.coordinates()));
        prop_assert_eq!(rover.status(), Status::Ok);
    }

    #[test]
    fn forward_then_backward_returns(
        (max_x, max_y, start) in plateau_and_start(),
        heading in any_direction(),
    ) {
        let mut rover = open_rover(max_x, max_y, heading, start);
        rover.forward();
        rover.backward();
        prop_assert_eq!(rover.coordinates(), start);
        prop_assert_eq!(rover.heading(), heading);
    }

    #[test]
    fn full_lap_wraps_to_start(
        (max_x, max_y, start) in plateau_and_start(),
        heading in any_direction(),
    ) {
        let mut rover = open_rover(max_x, max_y, heading, start);
        let lap = match heading {
            Direction::North | Direction::South => max_y + 1,
            Direction::East | Direction::West => max_x + 1,
        };
        for _ in 0..lap {
            rover.forward();
        }
        prop_assert_eq!(rover.coordinates(), start);
    }

    #[test]
    fn blocked_rover_never_moves_again(
        heading in any_direction(),
        commands in prop::collection::vec(any_command(), 0..32),
    ) {
        let start = Coordinates::new(2, 2);
        let neighbours = [
            Coordinates::new(2, 3),
            Coordinates::new(2, 1),
            Coordinates::new(3, 2),
            Coordinates::new(1, 2),
        ];
        let plateau = Arc::new(Plateau::new(5, 5, neighbours));
        let mut rover = Rover::new(plateau, heading, start);

        rover.forward();
        prop_assert_eq!(rover.status(), Status::Blocked);

        let executed = rover.accept_commands(&commands);
        prop_assert_eq!(executed, 0);
        prop_assert_eq!(rover.heading(), heading);
        prop_assert_eq!(rover.coordinates(), start);
        prop_assert_eq!(rover.status(), Status::Blocked);
    }

    #[test]
    fn rover_never_enters_obstacle(
        seed in any::<u32>(),
        heading in any_direction(),
        commands in prop::collection::vec(any_command(), 0..64),
    ) {
        let start = Coordinates::new(0, 0);
        let plateau = Arc::new(Plateau::generate_with_seed(9, 9, start, seed));
        let mut rover = Rover::new(Arc::clone(&plateau), heading, start);
        let executed = rover.accept_commands(&commands);

        prop_assert!(executed <= commands.len());
        prop_assert!(!plateau.contains_obstacle(rover.coordinates()));
        if executed < commands.len() {
            prop_assert_eq!(rover.status(), Status::Blocked);
        }
    }
}
