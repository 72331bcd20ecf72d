use idgen_core::filter::{BlacklistFilter, FilterChain, RegexFilter};
use idgen_core::generation::{Fulfillment, GenerationSettings, Generator};
use idgen_core::template::{Template, VariableBindings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Variables are single lowercase letters bound to strings
    let mut bindings = VariableBindings::new();
    bindings.set('f', "Alice")?;
    bindings.set('s', "Smith")?;
    bindings.set('n', "0123456789")?;
    bindings.set('l', "abcdefghijklmnopqrstuvwxyz")?;

    // Assignments can also be parsed, like the CLI does with '-d'
    bindings.parse_assignment("x=xyz")?;

    // Upper case keys are refused
    match bindings.set('F', "Alice") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // A template can be driven by hand:
    // first letter of 'f', all of 's', then a 2-digit counter
    let mut template = Template::compile("1f:s:n2++", &bindings)?;
    for _ in 0..3 {
        println!("Candidate: {}", template.produce()?);
    }

    // Unknown variables are reported at compile time
    match Template::compile("f:2q", &bindings) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // Filters reject candidates: here anything containing "bad" or ending with 'z'
    let mut filters = FilterChain::new();
    filters.add_filter(Box::new(BlacklistFilter::new(vec!["bad".to_owned()])));
    filters.add_filter(Box::new(RegexFilter::new("z$")?));

    // 5 ids, reproducible thanks to the seed
    let mut settings = GenerationSettings::new(5);
    settings.seed = Some(42);
    settings.set_max_attempts(1000)?;

    // 2 letters of 's', 3 random letters, and a resolver digit
    // that only disambiguates and never keeps the generation alive
    let mut generator = Generator::from_template("2s:l3+:[n+]", &bindings, filters, settings)?;
    let report = generator.generate()?;

    for (i, id) in report.ids.iter().enumerate() {
        println!("Generated id {}: {}", i + 1, id);
    }
    println!("{} attempt(s), {:?}", report.attempts, report.fulfillment);

    // A template without enough alternatives yields fewer ids than requested
    let mut generator = Generator::from_template("=u:n++", &bindings, FilterChain::new(), GenerationSettings::new(20))?;
    let report = generator.generate()?;
    if report.fulfillment == Fulfillment::Partial {
        println!("Only {} id(s): {:?}", report.ids.len(), report.ids);
    }

    Ok(())
}
