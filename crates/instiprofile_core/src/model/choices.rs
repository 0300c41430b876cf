//! Closed code sets for hostels, departments and degrees.
//!
//! # Responsibility
//! - Map every allowed storage code to a typed variant and a display label.
//! - Serialize and deserialize variants by their storage code.
//!
//! # Invariants
//! - Codes are unique within one set and never change once persisted.
//! - Unknown codes decode to `None`, never to a fallback variant.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

macro_rules! code_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($code:literal, $label:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Stable storage code.
            pub fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Decodes a storage code. Matching is exact and case-sensitive.
            pub fn from_code(value: &str) -> Option<Self> {
                match value {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Every variant in declaration order.
            pub fn all() -> &'static [Self] {
                Self::ALL
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

code_set! {
    /// Residence hall an institute address points at.
    Hostel {
        H1 => ("1", "Hostel 1"),
        H2 => ("2", "Hostel 2"),
        H3 => ("3", "Hostel 3"),
        H4 => ("4", "Hostel 4"),
        H5 => ("5", "Hostel 5"),
        H6 => ("6", "Hostel 6"),
        H7 => ("7", "Hostel 7"),
        H8 => ("8", "Hostel 8"),
        H9 => ("9", "Hostel 9"),
        H10 => ("10", "Hostel 10"),
        H10A => ("10A", "Hostel 10A"),
        H11 => ("11", "Hostel 11"),
        H12 => ("12", "Hostel 12"),
        H13 => ("13", "Hostel 13"),
        H14 => ("14", "Hostel 14"),
        H15 => ("15", "Hostel 15"),
        H16 => ("16", "Hostel 16"),
        Tansa => ("tansa", "Tansa"),
        Qip => ("qip", "QIP"),
    }
}

code_set! {
    /// Academic unit (department, centre, school or programme) of a program.
    Department {
        // Departments
        Ae => ("AE", "Aerospace Engineering"),
        Bb => ("BB", "Biosciences and Bioengineering"),
        Che => ("CHE", "Chemical Engineering"),
        Ch => ("CH", "Chemistry"),
        Cle => ("CLE", "Civil Engineering"),
        Cse => ("CSE", "Computer Science & Engineering"),
        Es => ("ES", "Earth Sciences"),
        Ee => ("EE", "Electrical Engineering"),
        Ese => ("ESE", "Energy Science and Engineering"),
        Hss => ("HSS", "Humanities & Social Science"),
        Idc => ("IDC", "Industrial Design Centre"),
        Mm => ("MM", "Mathematics"),
        Me => ("ME", "Mechanical Engineering"),
        Mems => ("MEMS", "Metallurgical Engineering & Materials Science"),
        Ph => ("PH", "Physics"),
        Ms => ("MS", "Material Science"),
        Phe => ("PHE", "Physical Education"),
        Pms => ("PMS", "Physics, Material Science"),
        Pc => ("PC", "Preparatory Course"),
        Re => ("RE", "Reliability Engineering"),
        // Centres
        Asc => ("ASC", "Application Software Centre"),
        Crnts => ("CRNTS", "Centre for Research in Nanotechnology and Science"),
        Casde => ("CASDE", "Centre for Aerospace Systems Design and Engineering"),
        Cc => ("CC", "Computer Centre"),
        Cdeep => ("CDEEP", "Centre for Distance Engineering Education Programme"),
        Cese => ("CESE", "Centre for Environmental Science and Engineering"),
        Csre => ("CSRE", "Centre of Studies in Resources Engineering"),
        Ctara => ("CTARA", "Centre for Technology Alternatives for Rural Areas"),
        Cfdvs => ("CFDVS", "Centre for Formal Design and Verification of Software"),
        Cuse => ("CUSE", "Centre for Urban Science and Engineering"),
        Dsce => ("DSCE", "Desai Sethi Centre for Entrepreneurship"),
        Iitbmra => ("IITBMRA", "IITB-Monash Research Academy"),
        Ncair => ("NCAIR", "National Centre for Aerospace Innovation and Research"),
        Ncm => ("NCM", "National Centre for Mathematics"),
        Saif => ("SAIF", "Sophisticated Analytical Instrument Facility"),
        Tctd => ("TCTD", "Tata Center for Technology and Design"),
        Wrcb => ("WRCB", "Wadhwani Research Centre for Bioengineering"),
        Biotech => ("BIOTECH", "Biotechnology"),
        // Schools
        Sjmsom => ("SJMSOM", "Shailesh J. Mehta School of Management"),
        Kresit => ("KReSIT", "Kanwal Rekhi School of Information Technology"),
        // Interdisciplinary programmes
        Cls => ("CLS", "Climate Studies"),
        Et => ("ET", "Educational Technology"),
        Ieor => ("IEOR", "Industrial Engineering and Operations Research"),
        Sce => ("SCE", "Systems and Control Engineering"),
        // Design programmes
        Anim => ("ANIM", "Animation"),
        Ixd => ("IxD", "Interaction Design"),
        Mvd => ("MVD", "Mobility and Vehicle Design"),
        Viscom => ("VISCOM", "Visual Communication"),
        // Others
        Im => ("IM", "Industrial Management"),
        Mmm => ("MMM", "Materials, Manufacturing and Modelling"),
        Corrsci => ("CORRSCI", "Corrosion Science and Engineering"),
        Cep => ("CEP", "Continuing Education Programme"),
        AppGp => ("AppGP", "Applied Geophysics"),
        Asi => ("ASI", "Applied Statistics and Informatics"),
        Bme => ("BME", "Biomedical Engineering"),
    }
}

impl Department {
    /// Variants ordered by label, the order pickers present them in.
    pub fn choices_by_label() -> Vec<Self> {
        let mut choices = Self::all().to_vec();
        choices.sort_by_key(|department| department.label());
        choices
    }
}

code_set! {
    /// Degree a program leads to.
    Degree {
        Btech => ("BTECH", "Bachelor of Technology"),
        Mtech => ("MTECH", "Master of Technology"),
        Dd => ("DD", "B.Tech. + M.Tech. Dual Degree"),
        Msc => ("MSC", "Master of Science"),
        Phd => ("PHD", "Doctor of Philosophy"),
        Bdes => ("BDES", "Bachelor of Design"),
        Mdes => ("MDES", "Master of Design"),
        Mphil => ("MPHIL", "Master of Philosophy"),
        Mmg => ("MMG", "Master of Management"),
        MsExit => ("MSEx", "M.S. (Exit Degree)"),
        MtechExit => ("MtechEx", "Master of Technology (Exit Degree)"),
        MtechPhdDual => ("MtechPhDDD", "M.Tech. + Ph.D. Dual Degree"),
        Pc => ("PC", "Preparatory Course"),
        Vs => ("VS", "Visiting Student"),
        MphilExit => ("MPhilEx", "Master of Philosophy (Exit Degree)"),
        MscExit => ("MScEx", "Master of Science (Exit Degree)"),
        MscMtechDual => ("MScMTechDD", "M.Sc. + M.Tech. Dual Degree"),
        MscPhdDual => ("MScPhDDD", "M.Sc. + Ph.D. Dual Degree"),
        MphilPhdDual => ("MPhilPhDDD", "M.Phil. + Ph.D. Dual Degree"),
        Emba => ("EMBA", "Executive MBA"),
        Fybs => ("FYBS", "Four Year BS"),
        Imtech => ("IMTECH", "Integrated M.Tech."),
        Mscbr => ("MSCBR", "Master of Science By Research"),
        Tymsc => ("TYMSC", "Two Year M.Sc."),
        Fyimsc => ("FYIMSC", "Five Year Integrated M.Sc."),
        Diit => ("DIIT", "D.I.I.T."),
        DiitExit => ("DIITEx", "D.I.T.T. (Exit Degree)"),
    }
}
