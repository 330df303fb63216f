pub mod load_cell;
