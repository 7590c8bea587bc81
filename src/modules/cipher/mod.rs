/// Key used to shift alphabetic characters (cyclic).
pub const ALPHA_KEY: &str = "ARGOSROCK";

/// Key used to substitute numeric characters (cyclic).
pub const NUMBER_KEY: &str = "1963";

/// Reversible keyed substitution transform used to mask stored usernames
/// and passwords. Letters are shifted by the alphabetic key within their
/// own case, digits are substituted through a 10x10 table keyed by the
/// numeric key. Not cryptographically secure by design; it only keeps
/// credentials from being stored or exported in the clear.
///
/// Characters outside A-Z, a-z, 0-9 are silently dropped in both
/// directions. Validation upstream already rejects such characters for
/// usernames and passwords, so nothing reaching the cipher loses data.
pub struct Cipher {
    table: [[u8; 10]; 10],
}

impl Cipher {
    /// Build the cipher with its digit substitution table.
    /// The table satisfies `table[i][j] = (10 + j - i) % 10`, which makes
    /// every row (and column) a permutation of 0-9.
    pub fn new() -> Self {
        let mut table = [[0u8; 10]; 10];
        for (i, row) in table.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = ((10 + j - i) % 10) as u8;
            }
        }
        Self { table }
    }

    /// Encrypt a single digit through the substitution table.
    fn encrypt_digit(&self, plain_digit: u8, key_digit: u8) -> u8 {
        self.table[plain_digit as usize][key_digit as usize]
    }

    /// Reverse-lookup the row where the key digit column holds the
    /// ciphertext digit; the row index is the plaintext digit. Unique
    /// because each row is a permutation of 0-9.
    fn decrypt_digit(&self, cipher_digit: u8, key_digit: u8) -> u8 {
        (0..10u8)
            .find(|&i| self.table[i as usize][key_digit as usize] == cipher_digit)
            .expect("every table row is a permutation of 0-9")
    }

    /// Shift a letter right by the key letter, wrapping within its own case.
    fn encrypt_char(c: char, key_char: char) -> char {
        let key_shift = key_char as u8 - b'A';
        if c.is_ascii_uppercase() {
            ((c as u8 - b'A' + key_shift) % 26 + b'A') as char
        } else {
            ((c as u8 - b'a' + key_shift) % 26 + b'a') as char
        }
    }

    /// Shift a letter left by the key letter, wrapping within its own case.
    fn decrypt_char(c: char, key_char: char) -> char {
        let key_shift = key_char as u8 - b'A';
        if c.is_ascii_uppercase() {
            ((c as u8 - b'A' + 26 - key_shift) % 26 + b'A') as char
        } else {
            ((c as u8 - b'a' + 26 - key_shift) % 26 + b'a') as char
        }
    }

    /// Obfuscate a plaintext: letters shift by the alphabetic key, digits
    /// substitute through the numeric key. Only letters advance the
    /// alphabetic key index and only digits advance the numeric key index.
    pub fn obfuscate(&self, plaintext: &str) -> String {
        let alpha_key: Vec<char> = ALPHA_KEY.chars().collect();
        let number_key: Vec<u8> = NUMBER_KEY.bytes().map(|b| b - b'0').collect();
        let mut output = String::with_capacity(plaintext.len());
        let mut alpha_index = 0;
        let mut number_index = 0;

        for c in plaintext.chars() {
            if c.is_ascii_alphabetic() {
                output.push(Self::encrypt_char(c, alpha_key[alpha_index % alpha_key.len()]));
                alpha_index += 1;
            } else if c.is_ascii_digit() {
                let digit = c as u8 - b'0';
                let encrypted =
                    self.encrypt_digit(digit, number_key[number_index % number_key.len()]);
                output.push((encrypted + b'0') as char);
                number_index += 1;
            }
            // Anything else is dropped.
        }
        output
    }

    /// Deobfuscate a ciphertext produced by [`Cipher::obfuscate`] with the
    /// same keys, reproducing the original plaintext exactly.
    pub fn deobfuscate(&self, ciphertext: &str) -> String {
        let alpha_key: Vec<char> = ALPHA_KEY.chars().collect();
        let number_key: Vec<u8> = NUMBER_KEY.bytes().map(|b| b - b'0').collect();
        let mut output = String::with_capacity(ciphertext.len());
        let mut alpha_index = 0;
        let mut number_index = 0;

        for c in ciphertext.chars() {
            if c.is_ascii_alphabetic() {
                output.push(Self::decrypt_char(c, alpha_key[alpha_index % alpha_key.len()]));
                alpha_index += 1;
            } else if c.is_ascii_digit() {
                let digit = c as u8 - b'0';
                let decrypted =
                    self.decrypt_digit(digit, number_key[number_index % number_key.len()]);
                output.push((decrypted + b'0') as char);
                number_index += 1;
            }
        }
        output
    }
}

impl Default for Cipher {
    fn default() -> Self {
        Self::new()
    }
}
