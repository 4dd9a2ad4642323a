use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use gridpath_cli::{App, Command};
use gridpath_core::{solve_matrix_timed, Error, Strategy};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Solve(args) => solve(args),
        Command::Generate(args) => generate(args),
        Command::Schema => schema(),
    }
}

fn generate(args: &gridpath_cli::GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let instances = gridpath_testgen::generator::generate_mult_instances(
        args.n_grid,
        args.rows,
        args.cols,
        args.blocked,
    );

    for instance in &instances {
        let path = args.output_dir.join(format!("{}.json", instance.get_id()));
        let file = fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::to_writer_pretty(file, instance).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} instances to {}",
        instances.len(),
        args.output_dir.display()
    );
}

fn schema() {
    let schema = schemars::schema_for!(gridpath_testgen::generator::Instance);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}

/// Collect the input files: directories expand to their `.grid` and
/// `.json` entries, sorted for reproducible output.
fn collect_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(input)
                .unwrap_or_else(|e| {
                    eprintln!("Failed to read {}: {e}", input.display());
                    process::exit(1);
                })
                .filter_map(Result::ok)
                .map(|e| e.path())
                .filter(|p| {
                    p.extension()
                        .is_some_and(|ext| ext == "grid" || ext == "json")
                })
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(input.clone());
        }
    }
    files
}

/// Read one input file into a matrix, whatever its format.
fn load_matrix(path: &Path) -> Result<Vec<Vec<u8>>, String> {
    if path.extension().is_some_and(|ext| ext == "json") {
        let file = fs::File::open(path).map_err(|e| e.to_string())?;
        let instance: gridpath_testgen::generator::Instance =
            serde_json::from_reader(file).map_err(|e| e.to_string())?;
        Ok(instance.get_data().clone())
    } else {
        let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
        gridpath_parser::parse_grid(&text).map_err(|e| e.to_string())
    }
}

fn solve(args: &gridpath_cli::SolveArgs) {
    let strategy = Strategy::from(args.strategy);
    let files = collect_inputs(&args.inputs);
    if files.is_empty() {
        eprintln!("No input files found");
        process::exit(1);
    }

    let mut any_invalid = false;

    for path in files {
        let filename = path.file_name().unwrap_or_default().to_string_lossy();

        let matrix = match load_matrix(&path) {
            Ok(matrix) => matrix,
            Err(e) => {
                eprintln!("{filename}: {e}");
                any_invalid = true;
                continue;
            }
        };

        let timed = solve_matrix_timed(&matrix, strategy);
        if args.json {
            let value = match &timed.outcome {
                Ok(solution) => serde_json::json!({
                    "file": filename,
                    "found": true,
                    "path": solution.path,
                    "finish": solution.finish,
                    "elapsed": timed.elapsed.to_string(),
                }),
                Err(error) => serde_json::json!({
                    "file": filename,
                    "found": false,
                    "error": error,
                    "elapsed": timed.elapsed.to_string(),
                }),
            };
            println!("{value}");
            continue;
        }

        match &timed.outcome {
            Ok(solution) => {
                println!(
                    "{filename}: FOUND finish=({},{}) in {}",
                    solution.finish.row, solution.finish.col, timed.elapsed
                );
                if args.verbose {
                    let cells: Vec<String> = solution
                        .path
                        .iter()
                        .map(|c| format!("({},{})", c.row, c.col))
                        .collect();
                    println!("  {}", cells.join(" -> "));
                }
            }
            Err(Error::NoSolution) => {
                println!("{filename}: NO SOLUTION in {}", timed.elapsed);
            }
            Err(Error::Infeasible(reason)) => {
                println!("{filename}: INFEASIBLE ({reason:?}) in {}", timed.elapsed);
            }
            Err(Error::InvalidInput(reason)) => {
                eprintln!("{filename}: invalid input ({reason:?})");
                any_invalid = true;
            }
        }
    }

    if any_invalid {
        process::exit(1);
    }
}
