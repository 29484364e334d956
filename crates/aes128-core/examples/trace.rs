//! Encrypts the FIPS-197 example block and prints every intermediate state.

use aes128_core::{encrypt_block_traced, Aes128Key, Snapshot};

fn main() {
    let key = Aes128Key::from([
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ]);
    let plaintext = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    let ciphertext = encrypt_block_traced(&plaintext, &key, &mut |s: &Snapshot| print!("{s}"));

    let hex: String = ciphertext.iter().map(|b| format!("{b:02x}")).collect();
    assert_eq!(hex, "69c4e0d86a7b0430d8cdb78070b4c55a");
    println!("ciphertext: {hex}");
}
