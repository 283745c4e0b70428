use clabe::*;

fn main() {
    println!("=== CLABE Validation ===\n");

    let codes = [
        "002010077777777771", // BANAMEX, Aguascalientes
        "014905000000555552", // Santander, shared city code
        "12345",              // too short
        "00201007777777A771", // letter
        "002010077777777770", // wrong check digit
        "001010077777777772", // unregistered bank
        "002001077777777777", // unregistered city
    ];

    for code in &codes {
        let result = validate(code);
        let verdict = if result.is_error { "INVALID" } else { "valid" };
        println!("  {code:<20} => {verdict}: {}", result.message);
        if let Some(short) = result.bank_short_name {
            println!("      bank={short}, city={}", result.city_name.unwrap_or("—"));
        }
    }

    println!("\n=== Typed parsing ===\n");

    match "012180012345678909".parse::<Clabe>() {
        Ok(clabe) => println!(
            "  {clabe}: bank {} ({}), plaza {}, account {}",
            clabe.bank_code(),
            clabe.bank().short_name,
            clabe.city_code(),
            clabe.account_number()
        ),
        Err(e) => println!("  INVALID: {e}"),
    }
}
