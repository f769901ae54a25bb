fn main() {
    // Generates OUT_DIR/parser/grammar.rs from src/parser/grammar.lalrpop
    lalrpop::process_root().unwrap();
}
