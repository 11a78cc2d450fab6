//! Interactive console front end for the roomshare repositories.
//!
//! # Responsibility
//! - Print a numbered action menu, parse stdin, call one repository method
//!   per action and print the result.
//! - Keep all business rules in `roomshare_core`; this binary is I/O only.

use roomshare_core::{
    default_log_level, init_logging, Chore, ChoreRepository, ConnectionProvider, RepoError, Room,
    RoomRepository, RoommateRepository, SqliteChoreRepository, SqliteRoomRepository,
    SqliteRoommateRepository,
};
use std::io::{self, BufRead, Write};

const DEFAULT_DB_PATH: &str = "roomshare.db";

fn main() {
    let db_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ROOMSHARE_DB").ok())
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    if let Ok(cwd) = std::env::current_dir() {
        let log_dir = cwd.join("logs");
        if let Some(log_dir) = log_dir.to_str() {
            if let Err(err) = init_logging(default_log_level(), log_dir) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
    }

    let provider = ConnectionProvider::new(&db_path);
    println!(
        "roomshare {} (database: {db_path})",
        roomshare_core::core_version()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_menu();
        let Some(selection) = read_line(&mut lines) else {
            break;
        };

        let outcome = match selection.trim() {
            "1" => show_rooms(&provider),
            "2" => search_room(&provider, &mut lines),
            "3" => add_room(&provider, &mut lines),
            "4" => update_room(&provider, &mut lines),
            "5" => delete_room(&provider, &mut lines),
            "6" => show_chores(&provider),
            "7" => add_chore(&provider, &mut lines),
            "8" => update_chore(&provider, &mut lines),
            "9" => delete_chore(&provider, &mut lines),
            "10" => show_unassigned_chores(&provider),
            "11" => assign_chore(&provider, &mut lines),
            "12" => show_roommates(&provider),
            "13" => search_roommate(&provider, &mut lines),
            "0" => break,
            other => {
                println!("unknown selection `{other}`");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("operation failed: {err}");
        }
    }
}

fn print_menu() {
    println!();
    println!("Select an action:");
    println!("  1) Show all rooms");
    println!("  2) Search for a room");
    println!("  3) Add a room");
    println!("  4) Update a room");
    println!("  5) Delete a room");
    println!("  6) Show all chores");
    println!("  7) Add a chore");
    println!("  8) Update a chore");
    println!("  9) Delete a chore");
    println!(" 10) Show unassigned chores");
    println!(" 11) Assign a chore");
    println!(" 12) Show all roommates");
    println!(" 13) Search for a roommate");
    println!("  0) Exit");
    print!("> ");
    let _ = io::stdout().flush();
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn read_line(lines: &mut Lines<'_>) -> Option<String> {
    lines.next().and_then(|line| line.ok())
}

fn prompt(lines: &mut Lines<'_>, label: &str) -> Option<String> {
    print!("{label}: ");
    let _ = io::stdout().flush();
    read_line(lines).map(|line| line.trim().to_string())
}

fn prompt_i64(lines: &mut Lines<'_>, label: &str) -> Option<i64> {
    let raw = prompt(lines, label)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("`{raw}` is not a number");
            None
        }
    }
}

fn prompt_u32(lines: &mut Lines<'_>, label: &str) -> Option<u32> {
    let raw = prompt(lines, label)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("`{raw}` is not a non-negative number");
            None
        }
    }
}

fn show_rooms(provider: &ConnectionProvider) -> Result<(), RepoError> {
    let repo = SqliteRoomRepository::new(provider);
    for room in repo.get_all()? {
        println!(
            "{} - {} (max occupancy {})",
            room.id, room.name, room.max_occupancy
        );
    }
    Ok(())
}

fn search_room(provider: &ConnectionProvider, lines: &mut Lines<'_>) -> Result<(), RepoError> {
    let Some(id) = prompt_i64(lines, "Room id") else {
        return Ok(());
    };
    let repo = SqliteRoomRepository::new(provider);
    match repo.get_by_id(id)? {
        Some(room) => println!(
            "{} - {} (max occupancy {})",
            room.id, room.name, room.max_occupancy
        ),
        None => println!("no room with id {id}"),
    }
    Ok(())
}

fn add_room(provider: &ConnectionProvider, lines: &mut Lines<'_>) -> Result<(), RepoError> {
    let Some(name) = prompt(lines, "Room name") else {
        return Ok(());
    };
    let Some(max) = prompt_u32(lines, "Max occupancy") else {
        return Ok(());
    };

    let repo = SqliteRoomRepository::new(provider);
    let mut room = Room::new(name, max);
    repo.insert(&mut room)?;
    println!("{} has been added with id {}", room.name, room.id);
    Ok(())
}

fn update_room(provider: &ConnectionProvider, lines: &mut Lines<'_>) -> Result<(), RepoError> {
    let repo = SqliteRoomRepository::new(provider);
    show_rooms(provider)?;
    let Some(id) = prompt_i64(lines, "Room id to update") else {
        return Ok(());
    };
    let Some(existing) = repo.get_by_id(id)? else {
        println!("no room with id {id}");
        return Ok(());
    };

    let Some(name) = prompt(lines, "New name") else {
        return Ok(());
    };
    let Some(max) = prompt_u32(lines, "New max occupancy") else {
        return Ok(());
    };

    let updated = Room {
        id: existing.id,
        name,
        max_occupancy: max,
    };
    repo.update(&updated)?;
    println!("room {} updated", updated.id);
    Ok(())
}

fn delete_room(provider: &ConnectionProvider, lines: &mut Lines<'_>) -> Result<(), RepoError> {
    let Some(id) = prompt_i64(lines, "Room id to delete") else {
        return Ok(());
    };
    let repo = SqliteRoomRepository::new(provider);
    repo.delete(id)?;
    println!("room {id} deleted");
    Ok(())
}

fn show_chores(provider: &ConnectionProvider) -> Result<(), RepoError> {
    let repo = SqliteChoreRepository::new(provider);
    for chore in repo.get_all()? {
        println!("{} - {}", chore.id, chore.name);
    }
    Ok(())
}

fn add_chore(provider: &ConnectionProvider, lines: &mut Lines<'_>) -> Result<(), RepoError> {
    let Some(name) = prompt(lines, "Chore name") else {
        return Ok(());
    };
    let repo = SqliteChoreRepository::new(provider);
    let mut chore = Chore::new(name);
    repo.insert(&mut chore)?;
    println!("{} has been added with id {}", chore.name, chore.id);
    Ok(())
}

fn update_chore(provider: &ConnectionProvider, lines: &mut Lines<'_>) -> Result<(), RepoError> {
    let repo = SqliteChoreRepository::new(provider);
    show_chores(provider)?;
    let Some(id) = prompt_i64(lines, "Chore id to update") else {
        return Ok(());
    };
    let Some(existing) = repo.get_by_id(id)? else {
        println!("no chore with id {id}");
        return Ok(());
    };

    let Some(name) = prompt(lines, "New name") else {
        return Ok(());
    };
    let updated = Chore {
        id: existing.id,
        name,
    };
    repo.update(&updated)?;
    println!("chore {} updated", updated.id);
    Ok(())
}

fn delete_chore(provider: &ConnectionProvider, lines: &mut Lines<'_>) -> Result<(), RepoError> {
    let Some(id) = prompt_i64(lines, "Chore id to delete") else {
        return Ok(());
    };
    let repo = SqliteChoreRepository::new(provider);
    repo.delete(id)?;
    println!("chore {id} deleted");
    Ok(())
}

fn show_unassigned_chores(provider: &ConnectionProvider) -> Result<(), RepoError> {
    let repo = SqliteChoreRepository::new(provider);
    let unassigned = repo.get_unassigned()?;
    if unassigned.is_empty() {
        println!("every chore is assigned");
        return Ok(());
    }
    for chore in unassigned {
        println!("{} - {}", chore.id, chore.name);
    }
    Ok(())
}

fn assign_chore(provider: &ConnectionProvider, lines: &mut Lines<'_>) -> Result<(), RepoError> {
    show_chores(provider)?;
    let Some(chore_id) = prompt_i64(lines, "Chore id") else {
        return Ok(());
    };
    show_roommates(provider)?;
    let Some(roommate_id) = prompt_i64(lines, "Roommate id") else {
        return Ok(());
    };

    let repo = SqliteChoreRepository::new(provider);
    let assignment = repo.assign(roommate_id, chore_id)?;
    println!(
        "chore {} assigned to roommate {} (assignment {})",
        assignment.chore_id, assignment.roommate_id, assignment.id
    );
    Ok(())
}

fn show_roommates(provider: &ConnectionProvider) -> Result<(), RepoError> {
    let repo = SqliteRoommateRepository::new(provider);
    for roommate in repo.get_all()? {
        println!(
            "{} - {} (rent portion {}, room {})",
            roommate.id,
            roommate.full_name(),
            roommate.rent_portion,
            roommate.room_id
        );
    }
    Ok(())
}

fn search_roommate(provider: &ConnectionProvider, lines: &mut Lines<'_>) -> Result<(), RepoError> {
    let Some(id) = prompt_i64(lines, "Roommate id") else {
        return Ok(());
    };
    let repo = SqliteRoommateRepository::new(provider);
    match repo.get_by_id(id)? {
        Some(roommate) => {
            println!(
                "{} - {} (rent portion {})",
                roommate.id,
                roommate.full_name(),
                roommate.rent_portion
            );
            if let Some(room) = roommate.room {
                println!(
                    "lives in {} (max occupancy {})",
                    room.name, room.max_occupancy
                );
            }
        }
        None => println!("no roommate with id {id}"),
    }
    Ok(())
}
