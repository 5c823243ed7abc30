//! Literal test data: the `ssh-rsa` keys used by the browser helper this crate
//! replaces, its legacy raw signature, and a real SSHSIG produced by
//! `ssh-keygen -Y sign -n file` over the sample message.
//!
//! Decimal values were computed independently of this crate and serve as golden
//! results for the parsers.

pub const HOLDEN_PUBLIC_KEY: &str = concat!(
    "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAACAQDSeqUGIrvHAAFF3uZ1eOm5yGItZQEYkcLCJo4VSpqBvdIep1LW",
    "rcIPYASiFNT7bDX1rJ50qKsx6o6y9XJP6e5nIF2j+KJ8Qwf0h2yqqUm6uoB5MwKqpEMmk4fYJ+MmUc7yzTaaDVbo",
    "M+KtO9wk7JcH5WXuvpTc/GPqCdaJFwYe9DZXsueoTcCPKDiU2MgivJGulBVcNGqagg1Zs+Pv4uU6XA49geMvpLHd",
    "5S2zZraG0XlE/aCj9hGoANvvJcyaGKuwmOplmzJ9s0J+8j86/3v5frI4WPTYnX6SInVaCSjhJGg4OvIT8NVBvFdu",
    "35KFvQqQFqsXWM3hZ0UGVx6XBSUaFCh4TRqOgVngv6WZ2tdRhq7gn3XHJ+kuIP9Rd4Sl3+pY4vb0sTHbeRciNRlv",
    "ccobn1ao8eZyReYdfe+L7/T3rxmlqIVXLJGIRno6XWS4cOvdOFHxF7ouf7Ll24GSY0/yZqvXDojSCg1Cpjg35SEG",
    "J06KqO1sy2p88WVjt3Stc2zhlYEQVSNXvBzRHTV4Xi4iT68UT3txHm0snRhNIxkEAnA3bBNEcAOvn/c5RiC44OGl",
    "/N3rrLQAaoohL1Pt5nRv2slA8XDAfWtP7QKcgSIsmXGbztKkcmWb3mVy+YSvaLLi7lvi6r1HtADFBbiojmRKYZxG",
    "Huz8qJEFiCxQHnop2Q==",
);

pub const PRANJAL_PUBLIC_KEY: &str = concat!(
    "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAACAQCpcGyI8jC+r1EcksaZwVM4vKFzrfMoZ+fDEW6dhQ7OVSwq+T0e",
    "rXssZ+w2IvTYKIy3aOiebAxPl+NdLLrpXWdq8g/yt0MhF7fbaAj7PLJukpSiWrgvu6/tkd3hTkhN8YC2FbjKSgq6",
    "fYKm95nt0BplnVn129ZXEaCKxRcxrQifumf1donbIfyRKScvulDu6ojusNvuPhUPPKTE1A6x5A4uXIU4aEn+vkpZ",
    "bCbVzsNX7N9YHOmphtxuJAKoqIDZ7NxaeYXQgUoPvZagu/RkYQgL8+B8kqH/B4Hj6pIaXSxiwBUoxovnDp/0Si8F",
    "sXfKwj2BWnN2HbzqV78cMrI/HDxIkoFa20zLkA3ATIvEX7UMTd9Q+JritrDWCngxfb+QC91nj/g9MfufcFUDZkyh",
    "HyYmikdbqMSxAXgSkmil6QHr5PiehmuwvY53QWjokNIBHn3XkCmYdlqD7LgvHV4Bj69XYRD+rWvYH7uzNFmgdMSE",
    "twYWOT9Pk53U9yCmrRzfAYen/Fp1MBHYH2eRe+ICE6LI+xUI/LqOj1tLJcC+c0lxmDcUs5loDLM6fpOotymHmoZE",
    "RdPAOcxjy4siNN027EatSLBXlQ7Z2kzJQXaEHYQ6GZ6TE2HLZeH9COnNmX9rKR/E7Ohasx1Co9Lm2ZDhPJV5mtD3",
    "FSo7DRghuHmcPmgTjQ==",
);

pub const DURU_PUBLIC_KEY: &str = concat!(
    "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAACAQDHq6HsKjUDHNza6Ql1/1swbw1Af29u3L9/pSLtxB/glMjX3D+n",
    "Ff66R/R2AIVRKZ5+dLyKwxWbNUX9JNbXv4pwjUCjI6kh0khTROl1MtvQV0jRXWv2KFMg4bXyb/+vZvVxGQZwgjty",
    "8d6VZxtY9S2ip9NK4X7XHmXDMeXbweHrllJM3VkC6ZNdasLXRr/iNf3JoMuRExYC5CY9kQ2RLVbav3ARF/kdhlfQ",
    "sB8Gd5SfxNkD2GNDdpJ8EApgNABput6nOC84lztXqyKWjFVALD8dplq0R5UG4wQxbiWIKDkbRd2GmWyXVK1t/U39",
    "AVhWbLrZkZ/VV/tZmXLWxDJriAFNc168pgV3gnY8iyYm3nfi58xj1XuoZbQLrVjFYo/XQWjBkIvv6eVZAYTp5qDw",
    "LFAH4YB7pPXE4jCybZ0fibhOXSpSovQbHGjkEO/SIevYBJsrKnZqfpzmW7N5Dcc/u5YnSbdBGJoZAkwcMMZpka2N",
    "cWoBzkUFs/+TFPzhQ4dHfpmHKrDjWJPXgMQmYTxDoPDZ/y7L4HFDtOTaE0vER8EODiJpN+pQnTeapf3ctRlNbrt8",
    "4fZeX0LMPy6fKvLF2FNnlVhEqxXnbg1jxumN+Haeb6y6Flv6ERyzPi1zyc2HY3sw9NdAxJG85O/LaiJQZiaNNUxI",
    "0EFv856FVKC0NlT3dQ==",
);

pub const SAMPLE_PUBLIC_KEY: &str = concat!(
    "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAACAQDdwYjQNGRaeF2bDdzPhPQuOGv0+pkpGYjHwfsvJ+2wVboRgGtK",
    "Xmm6D7dmTN7WqX2fMRRcHv5wlrccb4JKMDLi6BCOIkDgzU/7siYb1ErmFPLx/3lbQ3Y6eGQWLcAphxMSM0XKXSYM",
    "hOx0cRINeeVOPmsCeWXXPLsA+h2sfflnsv6zJwWEBwhNksNwWQ0svvXEf9qMrvzCjVlNchsK2QurMTrnswLKrX7u",
    "xhfJ+Y3PoCIIXjbRCvL7KGyf1j0Dt79E5gusGE+2OIRv5VrRirOHKc9Iy9XrcpdslT4IWMy7JKgBZOtr9mS0KCLa",
    "OKCcTNHof0w1ClQj9DL7FmMtTlR2isYTytp1yhmRZbSooSGzAJViDMAwN1UNj/yh7HXrx+PUsNbJh91FYh80+TiY",
    "bpnzjrhuuOSTT9hSKuNSlSTySyO4VMrSsvOVQaM5mOnnoOn0NupsUvBl3cKLlkTZLHrvrzwipX/QOEqejDlUjBke",
    "Ia3JTzY7Mx9chV2U3R/QMsRP13AklhHpYT7VhIv0czyXx2D7xWjQ3BpUQ3ogaaFpCc8ehf5YxyiuwIGQAaxt0I6d",
    "ReLwhlkCWWHNt5eMAV6PfIEXtrVHV9WySNDe9/V4BkAVORcTTdZ+H5RyQuuCMmHyfSrlhmml2jKwLYFfTeMOfgWa",
    "u8MTs1R501ZKM4wLDQ==",
);

pub const SAMPLE_MESSAGE: &str = "some data";

/// Bare base64 RSA signature, no SSHSIG envelope.
pub const LEGACY_RAW_SIGNATURE: &str = concat!(
    "mMMH4crddVPNAlcVs+XBGThAuIuqMFGpOjImneWaDADRWBACN1V/TxnQUWeAYaub7icutB/C2eb0E9AxTMO4g6FD",
    "3s/+QYX3jzk9Zc59ZD8MZ5vy02lkV2Yap1cQKuj6kESgi9Nzf919kDuMCLKkm3x2Re4dCo74WZbymuuAcJQ=",
);

pub const SSHSIG_PUBLIC_KEY: &str = concat!(
    "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQDAVdHaB3i3Ou5SjtV6CVbi+W9hI3RSXcl9YcZb20N2lkYlC4Wo",
    "0L71QYsEiUBy+RYNcID/+79ExRSm6oWq/I6ecdWog11xOsYiX4R0TQSHbbd/KF+1tEVHJtvdx6sS4EyxkbHfl3mX",
    "GON7xZEUflkIGwDDN/eRGrZicU6L0vSDvkMhFdqGcnODEB3r7cf1vyEKKzh3b1ZVWVkpiWMLAQ4e/pRve1achNd8",
    "Lp6htXvBi29MSZh0EIQB+pgtzpQRKwBeLYQ2LN07Z4ghOybQWKNPfjWnQb0vktUd5CES8vhIq632O6kRNfRIFR0E",
    "3txfup77pa7sLJzSbdR8ZMRlwQzF fixture@example",
);

pub const SSHSIG_NAMESPACE: &str = "file";

pub const SSHSIG_ARMORED: &str = "\
-----BEGIN SSH SIGNATURE-----\n\
U1NIU0lHAAAAAQAAARcAAAAHc3NoLXJzYQAAAAMBAAEAAAEBAMBV0doHeLc67lKO1XoJVu\n\
L5b2EjdFJdyX1hxlvbQ3aWRiULhajQvvVBiwSJQHL5Fg1wgP/7v0TFFKbqhar8jp5x1aiD\n\
XXE6xiJfhHRNBIdtt38oX7W0RUcm293HqxLgTLGRsd+XeZcY43vFkRR+WQgbAMM395Eatm\n\
JxTovS9IO+QyEV2oZyc4MQHevtx/W/IQorOHdvVlVZWSmJYwsBDh7+lG97VpyE13wunqG1\n\
e8GLb0xJmHQQhAH6mC3OlBErAF4thDYs3TtniCE7JtBYo09+NadBvS+S1R3kIRLy+Eirrf\n\
Y7qRE19EgVHQTe3F+6nvulruwsnNJt1HxkxGXBDMUAAAAEZmlsZQAAAAAAAAAGc2hhNTEy\n\
AAABFAAAAAxyc2Etc2hhMi01MTIAAAEAnfNUrOgy7LP+qCRFgdQ5b9PanvOptCDOgjDbV8\n\
sKx4Vj3wgyy/I03/GX/XFSoIDdwPV/X5huglz/vjuDh69GX3gSgvf0m1uZ6rZVQt6JthpZ\n\
NbI/qZN4IZJOaPNt2hje5TdP0S+HU2e6AT5kG00mm2QfUrnacsVmB33fvTkpVAg++tt/Az\n\
10uG+Nw14+TD6VVoGj6zT72JgLLrh86Fyr+KwU+foCkary3Dlat30K5llL1+H3khNAnh2F\n\
ghuWGhf58eoOPGAG/lowR5/iAIMalBxRlQzdwV3cyDIECOyvtrOCNoh9E0WksVXaFAfhWq\n\
62u17dkPSSi3kX+z1a/VwWYw==\n\
-----END SSH SIGNATURE-----\n\
";

/// The armored signature above with the armor and line breaks removed.
pub const SSHSIG_BASE64: &str = concat!(
    "U1NIU0lHAAAAAQAAARcAAAAHc3NoLXJzYQAAAAMBAAEAAAEBAMBV0doHeLc67lKO1XoJVuL5b2EjdFJdyX1hxlvb",
    "Q3aWRiULhajQvvVBiwSJQHL5Fg1wgP/7v0TFFKbqhar8jp5x1aiDXXE6xiJfhHRNBIdtt38oX7W0RUcm293HqxLg",
    "TLGRsd+XeZcY43vFkRR+WQgbAMM395EatmJxTovS9IO+QyEV2oZyc4MQHevtx/W/IQorOHdvVlVZWSmJYwsBDh7+",
    "lG97VpyE13wunqG1e8GLb0xJmHQQhAH6mC3OlBErAF4thDYs3TtniCE7JtBYo09+NadBvS+S1R3kIRLy+EirrfY7",
    "qRE19EgVHQTe3F+6nvulruwsnNJt1HxkxGXBDMUAAAAEZmlsZQAAAAAAAAAGc2hhNTEyAAABFAAAAAxyc2Etc2hh",
    "Mi01MTIAAAEAnfNUrOgy7LP+qCRFgdQ5b9PanvOptCDOgjDbV8sKx4Vj3wgyy/I03/GX/XFSoIDdwPV/X5huglz/",
    "vjuDh69GX3gSgvf0m1uZ6rZVQt6JthpZNbI/qZN4IZJOaPNt2hje5TdP0S+HU2e6AT5kG00mm2QfUrnacsVmB33f",
    "vTkpVAg++tt/Az10uG+Nw14+TD6VVoGj6zT72JgLLrh86Fyr+KwU+foCkary3Dlat30K5llL1+H3khNAnh2FghuW",
    "Ghf58eoOPGAG/lowR5/iAIMalBxRlQzdwV3cyDIECOyvtrOCNoh9E0WksVXaFAfhWq62u17dkPSSi3kX+z1a/VwW",
    "Yw==",
);

pub const SAMPLE_MODULUS_DECIMAL: &str = concat!(
    "9046855248795888585645014027871475145262000721771606692057027485216593454275665734069799",
    "0063205069172319296798263362101206073200915742679186963413916498661252285433551431061488",
    "8422406173083199456767335258867187381420004719003717002259875855348622042099378369452347",
    "9806590802186184657427940929254772711644249982124402160608638950465775570015705708160094",
    "0875178525172378254442559263600462399068659106158860412062582214925998608199800958935820",
    "5989384436357363525970420920445020704219221699316913245207745618947632173070736561512111",
    "5892406850968117433458588062895208121381553555139035378341029031272059890369569548967234",
    "9800153209683095620264017074066694469863911144499679523906629815186381559827932364569621",
    "7883536227671345023491637465818253834095426668675461552232490803355789448293559577880956",
    "5109714030695812812870336051467884953509383820193068245256332694680589729412140617214381",
    "0662320779451426162658575733077951562310387001783366238387456078499167513281684293247048",
    "9294843873758800611168644239477136987585424567967641510146033188747995208002603611597516",
    "6299743661611525675030442032007538880648098667313798464677481443606684998258620521020260",
    "7022020541665416553862516906526776397043350632831632956695967165072338100425059900614529",
    "3",
);

pub const SSHSIG_MODULUS_DECIMAL: &str = concat!(
    "2428007384114191533346421107307458518628498243830334304273365062389706105373517247793228",
    "9551254508098822408550582459366072338155272551054471792668003319688710973862728400802404",
    "6526506345493296266567028191408402289552828935129919219398234138245128234175126959697927",
    "6858961953930645239032670619694735075374675106029140956881562070252269034383567524938832",
    "0417225195342000479195177802099064022072006334701748457710771631383267563248143254566743",
    "4907560399651199829539466167342771559136128996847505250279880695370853581378975257584577",
    "6144483990861979575910890497280047552537596230019441870363323146238073651499908543080365",
    "3",
);

pub const SSHSIG_SIGNATURE_DECIMAL: &str = concat!(
    "1993940475120102822328696938149921243657292788377692648854855370634772051986029070014408",
    "6191222756803399051447232754296884226558917468619130472167673187150888016658163528686678",
    "2087238184772614214113010212825593263404416722901758540095813724003799243467212647530209",
    "6629312141801559503915696323538603747779010597451381712342606859388414425789303452377260",
    "6469824771092099763999812087817128097558940696702658900155209095439336012300632031618931",
    "8331293503550634735682677321887676376732932548550612028987762036473784837832813662299177",
    "1288490543007026760713477947630110881974112874695590963353400934987738858008303099472035",
    "5",
);

/// Named fixture set handed to tests and benchmarks.
#[derive(Clone, Debug)]
pub struct Fixtures {
    pub public_keys: [(&'static str, &'static str); 4],
    pub message: &'static str,
    pub legacy_signature: &'static str,
    pub sshsig_public_key: &'static str,
    pub sshsig_namespace: &'static str,
    pub sshsig_armored: &'static str,
    pub sshsig_base64: &'static str,
}

impl Fixtures {
    pub fn public_key(&self, name: &str) -> Option<&'static str> {
        self.public_keys
            .iter()
            .find(|(key_name, _)| *key_name == name)
            .map(|(_, line)| *line)
    }

    /// All source keys joined the way the helper page presented them.
    pub fn public_key_list(&self) -> String {
        self.public_keys
            .iter()
            .map(|(_, line)| *line)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn load() -> Fixtures {
    Fixtures {
        public_keys: [
            ("holden", HOLDEN_PUBLIC_KEY),
            ("pranjal", PRANJAL_PUBLIC_KEY),
            ("duru", DURU_PUBLIC_KEY),
            ("sample", SAMPLE_PUBLIC_KEY),
        ],
        message: SAMPLE_MESSAGE,
        legacy_signature: LEGACY_RAW_SIGNATURE,
        sshsig_public_key: SSHSIG_PUBLIC_KEY,
        sshsig_namespace: SSHSIG_NAMESPACE,
        sshsig_armored: SSHSIG_ARMORED,
        sshsig_base64: SSHSIG_BASE64,
    }
}

#[test]
fn test_fixture_lookup() {
    let fixtures = load();
    assert_eq!(fixtures.public_key("duru"), Some(DURU_PUBLIC_KEY));
    assert_eq!(fixtures.public_key("nobody"), None);
    assert_eq!(fixtures.public_key_list().matches("ssh-rsa ").count(), 4);
}
