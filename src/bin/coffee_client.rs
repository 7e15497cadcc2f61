extern crate env_logger;
use std::io::Write;
use std::sync::Arc;
use serde_json::json;
use tokio::io::{ AsyncBufReadExt, BufReader };
use tokio::sync::mpsc;
use coffee_api_adventure::client::{
    demo_steps, render_state, Command, HttpCoffeeApiFactory, LocalStorageFactory, Session, SessionControl,
    StepRunner, WizardState, FAVORITE_COFFEE_KEY, HELP_TEXT
};
use coffee_api_adventure::resources::ResourceServiceFactory;

fn print_and_prompt(text: &str) {
    print!("{}> ", text);
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();
    let resource_service = match ResourceServiceFactory::create() {
        Ok(new_resource_service) => new_resource_service,
        Err(error) => {
            panic!("Couldn't create resource service: {}", error);
        }
    };
    let local_storage = match LocalStorageFactory::create() {
        Ok(new_local_storage) => Arc::new(new_local_storage),
        Err(error) => {
            panic!("Couldn't open local storage: {}", error);
        }
    };
    log::info!("Local storage lives at \"{}\"", local_storage.storage_file_path().display());
    if let Some(favorite) = local_storage.get_item(FAVORITE_COFFEE_KEY) {
        println!("{}", resource_service.render("stored_favorite_info_message_template", &json!({ "favorite": favorite })));
    }

    let coffee_api = Arc::new(HttpCoffeeApiFactory::create());
    let step_runner = Arc::new(StepRunner::new(coffee_api, local_storage, resource_service.clone()));
    let (resolution_sender, mut resolution_receiver) = mpsc::unbounded_channel();
    let mut session = Session::new(WizardState::new(Arc::new(demo_steps())), step_runner, resource_service, resolution_sender);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_and_prompt(&format!("{}\n{}", HELP_TEXT, render_state(session.state())));
    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => match line.parse::<Command>() {
                    Ok(command) => {
                        let (control, printed) = session.handle(command);
                        if control == SessionControl::Quit {
                            break;
                        }
                        print_and_prompt(&printed);
                    },
                    Err(message) => print_and_prompt(&format!("{}\n", message))
                },
                Ok(None) => break,
                Err(error) => {
                    log::error!("Couldn't read from stdin: {}", error);
                    break;
                }
            },
            Some((ticket, resolution)) = resolution_receiver.recv() => {
                if let Some(printed) = session.resolve(ticket, resolution) {
                    print_and_prompt(&format!("\n{}", printed));
                }
            }
        }
    }
}
