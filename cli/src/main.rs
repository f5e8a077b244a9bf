mod commands;
mod formatters;
mod options;

use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let base_url =
        env::var("GB_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

    let cmd = args[1].as_str();

    // Dispatch to command handlers
    let result = match cmd {
        "list" => commands::handle_list(&base_url),
        "get" => commands::handle_get(&base_url, &args),
        "create" => commands::handle_create(&base_url, &args),
        "update" => commands::handle_update(&base_url, &args),
        "delete" | "remove" => commands::handle_delete(&base_url, &args),
        "health" => commands::handle_health(&base_url),
        _ => {
            eprintln!("unknown command: {}", cmd);
            print_usage();
            return;
        }
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Gradebook CLI");
    eprintln!();
    eprintln!("Usage: gradebook <command> [args...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list                                List all records");
    eprintln!("  get <id>                            Show one record");
    eprintln!("  create --name <name> --marks <0-100> --grade <grade> --course <course>");
    eprintln!("                                      Create a new record");
    eprintln!("  update <id> --name <name> --marks <0-100> --grade <grade> --course <course>");
    eprintln!("                                      Replace a record's fields");
    eprintln!("  delete <id>                         Delete a record (aliases: remove)");
    eprintln!("  health                              Check service health");
    eprintln!();
    eprintln!("Environment Variables:");
    eprintln!("  GB_SERVER_URL   Service base URL (default: http://127.0.0.1:8080)");
}
