// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_core::HashAlg;

/// Expected outcome of a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Derivation succeeds with these values (hex).
    Valid {
        /// PRK = Extract(salt, IKM).
        prk: &'static str,
        /// OKM = Expand(PRK, info, L).
        okm: &'static str,
    },
    /// Derivation fails with an invalid-argument error.
    Invalid,
}

/// A single HKDF known-answer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// Human-readable identifier, e.g. `"RFC 5869 A.1"`.
    pub name: &'static str,
    /// Hash function.
    pub alg: HashAlg,
    /// Input keying material (hex).
    pub ikm: &'static str,
    /// Salt (hex); `None` means "not provided".
    pub salt: Option<&'static str>,
    /// Info (hex).
    pub info: &'static str,
    /// Requested OKM length in bytes.
    pub length: usize,
    /// Expected result.
    pub expected: Expected,
}

const IKM_0B_22: &str = "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b";
const IKM_0B_11: &str = "0b0b0b0b0b0b0b0b0b0b0b";
const IKM_0C_22: &str = "0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c";
const SALT_00_0C: &str = "000102030405060708090a0b0c";
const INFO_F0_F9: &str = "f0f1f2f3f4f5f6f7f8f9";

const IKM_00_4F: &str = concat!(
    "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
    "202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f",
    "404142434445464748494a4b4c4d4e4f",
);
const SALT_60_AF: &str = concat!(
    "606162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f",
    "808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9f",
    "a0a1a2a3a4a5a6a7a8a9aaabacadaeaf",
);
const INFO_B0_FF: &str = concat!(
    "b0b1b2b3b4b5b6b7b8b9babbbcbdbebfc0c1c2c3c4c5c6c7c8c9cacbcccdcecf",
    "d0d1d2d3d4d5d6d7d8d9dadbdcdddedfe0e1e2e3e4e5e6e7e8e9eaebecedeeef",
    "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
);

/// Every vector; RFC 5869 Appendix A first, in document order.
pub fn test_vectors() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "RFC 5869 A.1 basic SHA-256",
            alg: HashAlg::Sha256,
            ikm: IKM_0B_22,
            salt: Some(SALT_00_0C),
            info: INFO_F0_F9,
            length: 42,
            expected: Expected::Valid {
                prk: "077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5",
                okm: concat!(
                    "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf",
                    "34007208d5b887185865",
                ),
            },
        },
        TestCase {
            name: "RFC 5869 A.2 longer inputs SHA-256",
            alg: HashAlg::Sha256,
            ikm: IKM_00_4F,
            salt: Some(SALT_60_AF),
            info: INFO_B0_FF,
            length: 82,
            expected: Expected::Valid {
                prk: "06a6b88c5853361a06104c9ceb35b45cef760014904671014a193f40c15fc244",
                okm: concat!(
                    "b11e398dc80327a1c8e7f78c596a49344f012eda2d4efad8a050cc4c19afa97c",
                    "59045a99cac7827271cb41c65e590e09da3275600c2f09b8367793a9aca3db71",
                    "cc30c58179ec3e87c14c01d5c1f3434f1d87",
                ),
            },
        },
        TestCase {
            name: "RFC 5869 A.3 zero-length salt and info SHA-256",
            alg: HashAlg::Sha256,
            ikm: IKM_0B_22,
            salt: Some(""),
            info: "",
            length: 42,
            expected: Expected::Valid {
                prk: "19ef24a32c717b167f33a91d6f648bdf96596776afdb6377ac434c1c293ccb04",
                okm: concat!(
                    "8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d",
                    "9d201395faa4b61a96c8",
                ),
            },
        },
        TestCase {
            name: "RFC 5869 A.4 basic SHA-1",
            alg: HashAlg::Sha1,
            ikm: IKM_0B_11,
            salt: Some(SALT_00_0C),
            info: INFO_F0_F9,
            length: 42,
            expected: Expected::Valid {
                prk: "9b6c18c432a7bf8f0e71c8eb88f4b30baa2ba243",
                okm: concat!(
                    "085a01ea1b10f36933068b56efa5ad81a4f14b822f5b091568a9cdd4f155fda2",
                    "c22e422478d305f3f896",
                ),
            },
        },
        TestCase {
            name: "RFC 5869 A.5 longer inputs SHA-1",
            alg: HashAlg::Sha1,
            ikm: IKM_00_4F,
            salt: Some(SALT_60_AF),
            info: INFO_B0_FF,
            length: 82,
            expected: Expected::Valid {
                prk: "8adae09a2a307059478d309b26c4115a224cfaf6",
                okm: concat!(
                    "0bd770a74d1160f7c9f12cd5912a06ebff6adcae899d92191fe4305673ba2ffe",
                    "8fa3f1a4e5ad79f3f334b3b202b2173c486ea37ce3d397ed034c7f9dfeb15c5e",
                    "927336d0441f4c4300e2cff0d0900b52d3b4",
                ),
            },
        },
        TestCase {
            name: "RFC 5869 A.6 zero-length salt and info SHA-1",
            alg: HashAlg::Sha1,
            ikm: IKM_0B_22,
            salt: Some(""),
            info: "",
            length: 42,
            expected: Expected::Valid {
                prk: "da8c8a73c7fa77288ec6f5e7c297786aa0d32d01",
                okm: concat!(
                    "0ac1af7002b3d761d1e55298da9d0506b9ae52057220a306e07b6b87e8df21d0",
                    "ea00033de03984d34918",
                ),
            },
        },
        TestCase {
            name: "RFC 5869 A.7 salt not provided SHA-1",
            alg: HashAlg::Sha1,
            ikm: IKM_0C_22,
            salt: None,
            info: "",
            length: 42,
            expected: Expected::Valid {
                prk: "2adccada18779e7c2077ad2eb19d3f3e731385dd",
                okm: concat!(
                    "2c91117204d745f3500d636a62f64f0ab3bae548aa53d423b0d1f27ebba6f5e5",
                    "673a081d70cce7acfc48",
                ),
            },
        },
        TestCase {
            name: "basic SHA-224",
            alg: HashAlg::Sha224,
            ikm: IKM_0B_22,
            salt: Some(SALT_00_0C),
            info: INFO_F0_F9,
            length: 42,
            expected: Expected::Valid {
                prk: "94f65bed12265c1fa2747db60cadfcabbbbaede6be5a7a450de78231",
                okm: concat!(
                    "2f21cd7cbc818ca5c561b933728e2e08e154a87e1432399a820dee13aa222d0c",
                    "ee6152fa539ab70f8e80",
                ),
            },
        },
        TestCase {
            name: "one-byte output, empty salt SHA-224",
            alg: HashAlg::Sha224,
            ikm: IKM_0C_22,
            salt: Some(""),
            info: "",
            length: 1,
            expected: Expected::Valid {
                prk: "1425aa83ff9cc617040337b68ec3a3971c1d38f0837b430aa5019e5a",
                okm: "ca",
            },
        },
        TestCase {
            name: "basic SHA-384",
            alg: HashAlg::Sha384,
            ikm: IKM_0B_22,
            salt: Some(SALT_00_0C),
            info: INFO_F0_F9,
            length: 42,
            expected: Expected::Valid {
                prk: concat!(
                    "704b39990779ce1dc548052c7dc39f303570dd13fb39f7acc564680bef80e8de",
                    "c70ee9a7e1f3e293ef68eceb072a5ade",
                ),
                okm: concat!(
                    "9b5097a86038b805309076a44b3a9f38063e25b516dcbf369f394cfab43685f7",
                    "48b6457763e4f0204fc5",
                ),
            },
        },
        TestCase {
            name: "salt not provided, three blocks SHA-384",
            alg: HashAlg::Sha384,
            ikm: IKM_0B_22,
            salt: None,
            info: "",
            length: 100,
            expected: Expected::Valid {
                prk: concat!(
                    "10e40cf072a4c5626e43dd22c1cf727d4bb140975c9ad0cbc8e45b40068f8f0b",
                    "a57cdb598af9dfa6963a96899af047e5",
                ),
                okm: concat!(
                    "c8c96e710f89b0d7990bca68bcdec8cf854062e54c73a7abc743fade9b242daa",
                    "cc1cea5670415b52849c97c4e787c1f2130fdaaed2efee2fd43ab373b705464f",
                    "fbc36e70ca2a61a5ebf44d1bf8217df59cbe9dcf94a5a4546503e7f9c02e97b0",
                    "fac5cb8f",
                ),
            },
        },
        TestCase {
            name: "basic SHA-512",
            alg: HashAlg::Sha512,
            ikm: IKM_0B_22,
            salt: Some(SALT_00_0C),
            info: INFO_F0_F9,
            length: 42,
            expected: Expected::Valid {
                prk: concat!(
                    "665799823737ded04a88e47e54a5890bb2c3d247c7a4254a8e61350723590a26",
                    "c36238127d8661b88cf80ef802d57e2f7cebcf1e00e083848be19929c61b4237",
                ),
                okm: concat!(
                    "832390086cda71fb47625bb5ceb168e4c8e26a1a16ed34d9fc7fe92c14815793",
                    "38da362cb8d9f925d7cb",
                ),
            },
        },
        TestCase {
            name: "longer inputs SHA-512",
            alg: HashAlg::Sha512,
            ikm: IKM_00_4F,
            salt: Some(SALT_60_AF),
            info: INFO_B0_FF,
            length: 150,
            expected: Expected::Valid {
                prk: concat!(
                    "35672542907d4e142c00e84499e74e1de08be86535f924e022804ad775dde27e",
                    "c86cd1e5b7d178c74489bdbeb30712beb82d4f97416c5a94ea81ebdf3e629e4a",
                ),
                okm: concat!(
                    "ce6c97192805b346e6161e821ed165673b84f400a2b514b2fe23d84cd189ddf1",
                    "b695b48cbd1c8388441137b3ce28f16aa64ba33ba466b24df6cfcb021ecff235",
                    "f6a2056ce3af1de44d572097a8505d9e7a9354e5796284151c2dd39c39b3cd3d",
                    "8e50fcc383ebdec37476e03b721ef5efef873c281f018b8ca42e1245b2271f87",
                    "1ba6585ee6b7c47ddf0e1e64685e87eab3e2b4df5587",
                ),
            },
        },
        TestCase {
            name: "output one byte past 255 * HashLen SHA-1",
            alg: HashAlg::Sha1,
            ikm: IKM_0B_22,
            salt: None,
            info: "",
            length: 255 * 20 + 1,
            expected: Expected::Invalid,
        },
        TestCase {
            name: "output one byte past 255 * HashLen SHA-256",
            alg: HashAlg::Sha256,
            ikm: IKM_0B_22,
            salt: Some(SALT_00_0C),
            info: INFO_F0_F9,
            length: 255 * 32 + 1,
            expected: Expected::Invalid,
        },
        TestCase {
            name: "output one byte past 255 * HashLen SHA-512",
            alg: HashAlg::Sha512,
            ikm: IKM_0B_22,
            salt: None,
            info: "",
            length: 255 * 64 + 1,
            expected: Expected::Invalid,
        },
    ]
}
