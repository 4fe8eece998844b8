mod element;
mod legacy;
mod persistence;
mod prefix;
mod traits;
