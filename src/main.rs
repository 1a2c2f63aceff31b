/*!
 * Buddy Pool - Interactive Front-End
 *
 * Menu-driven driver for the allocator engine. All allocation logic lives in
 * the library; this binary only parses input and renders reported state.
 */

use std::io::{self, BufRead, Write};

use buddy_pool::BuddyPool;

fn main() {
    env_logger::init();

    let mut pool = BuddyPool::new();
    println!("Buddy System Initialized with {} KB.", pool.capacity());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Options:");
        println!("1. Allocate Memory");
        println!("2. Deallocate Memory");
        println!("3. Exit");

        let Some(choice) = prompt_number("Enter your choice: ", &mut lines) else {
            // EOF on stdin
            return;
        };

        match choice {
            Some(1) => {
                let Some(size) = prompt_number("Enter memory size to allocate (in KB): ", &mut lines)
                else {
                    return;
                };
                let Some(size) = size else {
                    println!("Invalid size! Please enter a number.");
                    continue;
                };
                match pool.allocate(size) {
                    Ok(_) => println!("Allocated {} KB.", size),
                    Err(e) => println!("Allocation failed: {}.", e),
                }
                print_state("After Allocation", &pool);
            }
            Some(2) => {
                let Some(size) =
                    prompt_number("Enter memory size to deallocate (in KB): ", &mut lines)
                else {
                    return;
                };
                let Some(size) = size else {
                    println!("Invalid size! Please enter a number.");
                    continue;
                };
                match pool.deallocate(size) {
                    Ok(_) => println!("Deallocated {} KB.", size),
                    Err(e) => println!("Deallocation failed: {}.", e),
                }
                print_state("After Deallocation", &pool);
            }
            Some(3) => {
                println!("Exiting...");
                return;
            }
            _ => println!("Invalid choice! Please try again."),
        }
    }
}

/// Print a prompt and read one line as a number
///
/// Outer `None` means stdin is exhausted; inner `None` means the line did not
/// parse as a nonnegative integer.
fn prompt_number(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Option<Option<usize>> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let line = lines.next()?.ok()?;
    Some(line.trim().parse::<usize>().ok())
}

fn print_state(label: &str, pool: &BuddyPool) {
    println!();
    println!("{}", label);
    println!("Memory State:");
    for block in pool.report() {
        println!("{}", block);
    }
}
