pub mod generate_code_route;
