use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vgen::{AppError, ViewGenerationRequest};

#[derive(Parser)]
#[command(name = "vgen")]
#[command(version)]
#[command(about = "Scaffold MVC view templates from a model catalog", long_about = None)]
struct Cli {
    /// Application base path (defaults to the current directory)
    #[arg(long, global = true)]
    app_base: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a view for a model
    #[clap(visible_alias = "v")]
    View {
        /// Model class, short or fully-qualified
        model_class: String,
        /// Name of the view to generate
        view_name: String,
        /// Template to render (List, Details, Create, Edit, Delete, Empty, ...)
        template_name: String,
        /// Data context class that exposes the model
        #[arg(long = "data-context", short = 'd')]
        data_context: Option<String>,
        /// Overwrite an existing view
        #[arg(short, long)]
        force: bool,
        /// Use the default layout page
        #[arg(long = "use-default-layout", visible_alias = "udl")]
        use_default_layout: bool,
        /// Layout page to use for the view
        #[arg(short = 'l', long = "layout-page")]
        layout_page: Option<String>,
        /// Generate a partial view
        #[arg(long = "partial-view", visible_alias = "partial")]
        partial_view: bool,
        /// Reference client script libraries in the view
        #[arg(long = "reference-script-libraries", visible_alias = "scripts")]
        reference_script_libraries: bool,
    },
    /// List available view templates
    #[clap(visible_alias = "t")]
    Templates,
}

fn main() {
    let cli = Cli::parse();

    let app_base = match cli.app_base {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(AppError::from),
    };

    let result: Result<(), AppError> = app_base.and_then(|app_base| match cli.command {
        Commands::View {
            model_class,
            view_name,
            template_name,
            data_context,
            force,
            use_default_layout,
            layout_page,
            partial_view,
            reference_script_libraries,
        } => {
            let request = ViewGenerationRequest {
                model_class,
                data_context_class: data_context,
                view_name,
                template_name,
                force,
                use_default_layout,
                layout_page,
                partial_view,
                reference_script_libraries,
            };
            vgen::view(&app_base, request).map(|_| ())
        }
        Commands::Templates => vgen::templates(&app_base).map(|names| {
            for name in names {
                println!("{}", name);
            }
        }),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
