use clabe::json::{validate_to_json, validate_value};
use serde_json::json;

fn main() {
    println!("=== Dynamic input ===\n");

    let payloads = [
        json!("002010077777777771"),
        json!("002010077777777770"),
        json!(2010077777777771_u64),
        json!(null),
    ];

    for payload in &payloads {
        match validate_value(payload) {
            Ok(result) => println!("  {payload} => {}", result.message),
            Err(e) => println!("  {payload} => ERROR: {e}"),
        }
    }

    println!("\n=== Response body ===\n");
    match validate_to_json("002028000000000019") {
        Ok(body) => println!("  {body}"),
        Err(e) => println!("  ERROR: {e}"),
    }
}
