use stamp::{
    cli::{get_log_level_from_verbose, parse_cli, run, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let dispatch_result = match cli.command {
        Commands::Template(args) => {
            let level = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(level).init();
            run(args)
        }
    };

    if let Err(err) = dispatch_result {
        default_error_handler(err);
    }
}
