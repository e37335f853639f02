use skillforge_core::{Profile, RoadmapMode, Workflow};
use std::io::{self, Write};

/// Run the interactive menu loop until the user exits or stdin closes.
///
/// Workflow errors are rendered inline and never terminate the loop; only
/// I/O failures on the terminal itself propagate.
pub fn run() -> anyhow::Result<()> {
    let mut workflow = crate::build_workflow()?;

    loop {
        println!();
        println!("SkillForge — Intelligent Career Path Builder");
        println!("1. Create new profile");
        println!("2. Load existing profile");
        println!("3. Generate roadmap");
        println!("4. Mark skill as completed");
        println!("5. View profile");
        println!("6. Exit");

        let Some(choice) = prompt("Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => create(&mut workflow)?,
            "2" => load(&mut workflow)?,
            "3" => generate(&workflow),
            "4" => mark_completed(&mut workflow)?,
            "5" => view(&workflow),
            "6" => {
                println!("Goodbye! Thank you for using SkillForge.");
                break;
            }
            other => println!("Invalid option: {other}"),
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line. `None` means stdin closed.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn create(workflow: &mut Workflow) -> io::Result<()> {
    let Some(name) = prompt("Name: ")? else {
        return Ok(());
    };
    let Some(role) = prompt("Current role: ")? else {
        return Ok(());
    };
    let Some(skills) = prompt("Skills (comma separated): ")? else {
        return Ok(());
    };
    let Some(goal) = prompt("Career goal: ")? else {
        return Ok(());
    };

    match workflow.create(&name, &role, &skills, &goal) {
        Ok(profile) => println!("Profile for {} saved.", profile.name),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn load(workflow: &mut Workflow) -> io::Result<()> {
    let Some(name) = prompt("Enter your name to load profile: ")? else {
        return Ok(());
    };

    match workflow.load(&name) {
        Ok(profile) => {
            println!("Loaded profile for {}.", profile.name);
            print_profile(profile);
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn generate(workflow: &Workflow) {
    // The menu always continues from the completed skills, like the
    // original prompt loop; the full-regeneration policy lives on the web
    // adapter.
    match workflow.view() {
        Ok(profile) => println!("Generating career roadmap for {}...", profile.name),
        Err(e) => {
            println!("{e}");
            return;
        }
    }

    match workflow.generate_roadmap(RoadmapMode::Incremental) {
        Ok(roadmap) => {
            println!();
            println!("{}", roadmap.trim());
            println!();
        }
        Err(e) => println!("{e}"),
    }
}

fn mark_completed(workflow: &mut Workflow) -> io::Result<()> {
    let Some(skill) = prompt("Enter completed skill: ")? else {
        return Ok(());
    };

    match workflow.mark_completed(&skill) {
        Ok(()) => println!("{skill} marked as completed."),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn view(workflow: &Workflow) {
    match workflow.view() {
        Ok(profile) => print_profile(profile),
        Err(e) => println!("{e}"),
    }
}

fn print_profile(profile: &Profile) {
    let join = |items: &[String]| {
        if items.is_empty() {
            "None".to_string()
        } else {
            items.join(", ")
        }
    };
    println!("Name: {}", profile.name);
    println!("Current role: {}", profile.current_role);
    println!("Skills: {}", join(&profile.skills));
    println!("Goal: {}", profile.goal);
    println!("Completed: {}", join(&profile.completed));
}
