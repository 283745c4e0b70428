use clabe::*;

fn main() {
    println!("=== Check digit ===\n");
    let prefix = "00201007777777777";
    match compute_checksum(prefix) {
        Some(digit) => println!("  {prefix} => {digit}"),
        None => println!("  {prefix} => not numeric"),
    }

    println!("\n=== Construction ===\n");

    let inputs: [(&str, &str, &str); 4] = [
        ("2", "10", "7777777777"),
        ("12", "180", "1234567890"),
        ("72", "580", "98765432109"),
        ("1234", "10", "5"), // bank code truncated to 234
    ];

    for (bank, city, account) in &inputs {
        let code = construct(bank, city, account);
        let result = validate(&code);
        println!(
            "  bank={bank:<5} city={city:<4} account={account:<12} => {code} ({})",
            result.message
        );
    }

    println!("\n=== Banks ===\n");
    for bank in banks().iter().take(10) {
        println!("  {:03}  {:<15} {}", bank.code, bank.short_name, bank.full_name);
    }
    println!("  ... {} banks, {} city codes", banks().len(), city_index().len());
}
