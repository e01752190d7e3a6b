use dice_cup::{Factory, LogTracer, Rollable};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let factory = Factory::default();
    let tracer = Rc::new(LogTracer::default());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        let line = line.trim();
        if !line.is_empty() {
            match factory.new_instance(line) {
                Ok(mut node) => {
                    node.set_tracer_recursive(tracer.clone());
                    println!("{}", factory.notation(&node));
                    println!("  roll:    {}", node.roll());
                    println!("  minimum: {}", node.minimum());
                    println!("  maximum: {}", node.maximum());
                }
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
