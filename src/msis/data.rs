//! Model parameter tables.
//!
//! These are the fitted coefficients of the empirical model: one
//! 150-entry expansion table per thermospheric quantity (exospheric
//! temperature, each species' boundary density, the boundary temperature
//! and its gradient shape), 100-entry expansion tables for the lower
//! atmosphere temperature nodes, and the small reference-constant
//! blocks. The tables are read-only; every index has a fixed meaning in
//! the expansion functions and the drivers.

#![allow(clippy::excessive_precision)]


/// Exospheric temperature expansion.
pub(crate) static PT: [f64; 150] = [
     9.86573E-01, -1.63759E-02, -5.67063E-03,  3.59980E-03,  7.29965E-03,
     5.01584E-03, -6.48627E-03,  1.23821E-03, -4.01184E-03, -7.16392E-03,
     9.83839E-03,  8.70731E-03,  6.06141E-03,  1.47460E+01,  2.96228E-04,
     6.31471E-03,  4.37945E-03,  9.00172E+01,  4.98843E-03,  2.65744E-03,
    -4.77392E-06,  3.91837E-03, -9.72730E-03,  8.13959E-03,  3.04558E-02,
     1.41421E+00,  6.66365E-03,  8.96527E-03,  1.19030E-03,  4.93245E-07,
    -2.53713E-03,  1.66845E+01, -4.20011E-03, -1.03446E-04,  1.44413E-04,
     4.99775E-04, -6.97936E-04,  1.46601E-03,  9.97983E+01, -3.91887E-04,
    -6.56926E-04, -3.59555E-03, -7.63743E-03,  1.69019E-02,  1.35512E+00,
     4.69870E-04, -9.68647E-04, -3.28036E-04, -7.22233E-04, -3.36929E-04,
     9.65958E-03, -5.81581E-05, -7.74235E-04,  0.00000E+00,  5.82584E-04,
     8.26146E-04,  5.30525E-04, -4.68225E-04,  3.33012E+04,  3.87522E-06,
     8.88477E-04,  2.67479E-04, -2.61652E-04,  7.19874E+01, -5.10029E-04,
    -8.55539E-04,  8.97778E-04, -9.48724E-04, -8.10346E-04, -4.75470E-04,
     2.65615E-04,  2.25505E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     4.19208E+04,  4.17071E-04, -8.97416E-04,  3.48843E-05,  3.21629E+04,
     4.63922E-04,  7.37435E-04,  0.00000E+00, -5.81499E-04, -4.35292E-04,
    -5.72934E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    -9.84864E-04,  8.82826E-04, -3.88776E-04, -9.79941E-04,  4.18787E-04,
    -9.35759E-02,  7.14830E-03,  7.70114E+01,  8.53478E-04,  0.00000E+00,
    -7.47477E-03,  7.10906E-03, -3.22716E-03,  4.28432E-04,  4.87624E-04,
    -2.72868E-04, -3.26897E-04, -9.55591E-04, -1.63785E-04, -3.51113E-04,
     2.82296E-04, -6.17260E-04,  1.85000E-04,  2.97644E-04, -3.33604E-04,
    -7.91063E-04, -4.79087E-04,  9.48580E-04, -1.55358E+01, -7.34172E-03,
    -9.42706E-03, -4.81318E-03,  6.25909E-03,  1.31678E-03,  2.13408E+01,
    -9.61550E-03,  5.33924E-03, -2.12783E-03,  4.29632E-03, -7.23321E-03,
     3.30176E-03,  1.51079E+01,  5.23839E-04, -9.41853E-04, -4.18017E-04,
    -3.51065E-04,  4.59459E+01, -5.36584E-04,  9.70078E-03,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
];

/// Per-quantity expansions: boundary densities for He, O, N2, the
/// boundary temperature (TLB), then O2, Ar, H, N and anomalous O.
pub(crate) static PD: [[f64; 150]; 9] = [
    // He
    [
         1.05160E+00,  9.49398E-02,  9.43285E-02, -3.68877E-02,  3.10095E-02,
         1.17644E-02,  1.64680E-02,  4.01293E-02, -3.28782E-02, -1.74626E-02,
        -2.59062E-02, -4.59286E-02, -4.82588E-02,  1.86205E+01,  1.58052E-03,
        -5.26326E-02, -1.31872E-02,  9.87308E+01, -1.30496E-02,  3.03787E-03,
         3.16359E-06,  2.57074E-03, -1.97577E-02,  1.86452E-03,  4.31366E-02,
         2.76019E+00,  1.56558E-01,  5.13454E-02, -4.09565E-02,  5.80372E-07,
         9.83575E-03,  1.76976E+01,  2.71883E-03,  5.66769E-04, -8.21203E-04,
        -6.37425E-04,  2.13027E-04,  5.74503E-02,  8.18713E+01, -6.77853E-04,
        -3.44149E-04, -5.64810E-03, -1.20533E-03,  1.75542E-02,  1.18340E+00,
        -2.23748E-04, -1.88822E-04, -3.14139E-04,  6.06685E-04, -1.39160E-04,
        -4.23467E-03, -9.41049E-05,  8.72658E-04,  0.00000E+00, -4.70675E-04,
         7.73413E-04, -4.18843E-04, -1.81916E-04,  5.12855E+04,  6.81006E-06,
        -5.84055E-04,  5.28771E-04,  2.71329E-04,  6.72702E+00, -2.19066E-04,
         2.11972E-04,  1.64910E-04,  1.92881E-04, -7.32864E-04,  1.29141E-04,
        -7.23093E-04,  2.74025E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         4.26690E+04, -9.70029E-04, -2.20121E-04, -4.44855E-05,  4.62233E+04,
         7.24232E-04,  4.92695E-04,  0.00000E+00,  6.55766E-04, -6.40343E-04,
         2.38408E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
        -5.17175E-04,  5.28360E-04,  1.26903E-04,  6.84871E-04, -7.96444E-04,
        -6.88361E-02, -6.55637E-03,  8.29228E+01, -2.70469E-04,  0.00000E+00,
        -8.00918E-03, -1.10830E-03, -2.10839E-03,  6.44171E-04, -3.08659E-04,
         2.88696E-04,  7.10560E-04,  8.52999E-04, -6.62231E-04,  9.79889E-04,
         4.61172E-04,  6.52837E-04, -4.24956E-04, -1.04056E-04, -4.91333E-04,
        -5.01638E-04, -6.48830E-04,  8.47452E-04,  3.99848E+01, -2.56104E-03,
        -9.64322E-03, -1.30295E-03,  1.09532E-03,  6.80478E-03,  8.39351E+00,
        -1.15436E-03,  9.31185E-03,  4.40889E-03,  5.51127E-03, -3.82400E-03,
         1.60680E-03,  5.12571E+00,  2.48729E-04,  6.67788E-04, -7.55114E-04,
         3.82254E-04, -2.37769E+01, -8.40308E-04,  1.33654E-02,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // O
    [
         1.00636E+00, -5.59086E-02,  1.74732E-01,  7.01647E-03,  4.80050E-02,
        -5.18993E-03,  5.04382E-02, -5.11303E-02, -3.53561E-02,  3.14495E-02,
        -1.33959E-02, -3.11453E-02,  1.27944E-02,  1.78366E+01, -1.76544E-03,
         3.65143E-02, -5.76972E-03,  1.05324E+02, -2.04252E-02,  2.11455E-03,
        -5.71745E-06,  3.72832E-03, -9.29375E-03, -8.27886E-03,  2.57531E-02,
         2.15933E+00,  1.68983E-01,  3.39927E-02,  5.40043E-02, -6.59764E-07,
        -5.69622E-03,  5.28102E+00, -8.21505E-03, -8.01796E-04, -5.38739E-04,
         2.63314E-04,  7.52993E-04,  3.29881E-02,  8.22090E+01,  8.52313E-04,
        -9.76993E-04,  6.74340E-03,  3.38441E-03,  1.66176E-02,  1.34716E+00,
         5.20547E-04,  6.82707E-04, -3.95948E-04, -8.23511E-04, -3.88384E-04,
         8.20411E-03, -8.14471E-05, -4.98118E-04,  0.00000E+00, -7.49900E-04,
        -9.22803E-04, -8.08818E-04, -4.54226E-04,  5.99921E+04, -7.88326E-06,
        -8.77157E-04,  9.58196E-04,  9.04161E-04,  1.69330E+01, -4.81714E-04,
         7.86437E-04, -6.56137E-04, -8.97550E-04, -7.17026E-04, -9.63290E-04,
         1.69728E-04,  2.97454E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         4.43913E+04,  2.03124E-04,  9.48170E-04, -1.02288E-05,  5.38194E+04,
         4.86915E-04, -4.97334E-04,  0.00000E+00, -1.23938E-04, -4.54863E-04,
         9.02046E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
        -5.40588E-04, -9.74979E-04,  7.58206E-04, -3.32772E-04,  6.35721E-04,
        -8.77999E-02, -3.22369E-03, -8.36618E+01, -7.23973E-04,  0.00000E+00,
         2.94416E-03,  4.55975E-03,  3.33201E-03, -3.23958E-04,  3.87419E-04,
         2.51662E-04, -5.61384E-04,  3.47233E-04,  5.09408E-04,  9.12831E-04,
         1.74421E-04,  3.04268E-04,  9.96139E-04,  7.77855E-04, -6.06505E-04,
         5.35677E-04,  2.26016E-04,  7.32394E-04, -7.17791E+01, -5.78724E-03,
        -6.37523E-03,  9.16085E-03, -6.20653E-03, -3.95313E-03,  1.17619E+01,
         7.96487E-03,  1.88279E-03,  4.96996E-03, -1.20795E-03, -3.85583E-03,
         7.59229E-03,  4.69971E+00,  4.04249E-04,  5.64740E-04,  1.04271E-04,
        -5.64264E-04, -6.67640E+01,  9.51869E-04,  9.76202E-03,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // N2
    [
         1.17443E+00,  1.23385E-01, -1.56057E-01, -2.27348E-02,  3.50196E-02,
        -7.16790E-03, -3.68779E-02,  8.87614E-03,  3.69949E-02,  1.90000E-02,
        -6.11472E-03, -1.51228E-02, -4.42290E-02,  1.31556E+01, -1.54728E-03,
         2.07603E-02, -2.51105E-02,  9.10768E+01, -2.01897E-02,  3.09893E-03,
         2.82462E-06,  4.20491E-03,  1.23284E-02, -3.15115E-03,  2.49955E-02,
         2.18957E+00,  8.08086E-02, -3.43654E-02,  5.85229E-02, -2.88678E-07,
        -8.14095E-03,  1.54663E+01,  8.44201E-03, -7.08500E-04, -4.53497E-04,
        -1.21539E-04, -7.56058E-04, -2.46496E-02,  8.15136E+01,  9.60059E-04,
         7.87071E-04, -4.11537E-03, -1.66132E-03,  4.99167E-02,  1.15094E+00,
         2.53127E-04,  9.18604E-04, -3.67148E-04, -3.69889E-04, -3.75412E-04,
        -1.72634E-03, -1.99890E-04,  7.80905E-04,  0.00000E+00, -9.90781E-04,
        -1.52102E-04,  6.49758E-04,  3.92025E-04,  2.03913E+04, -9.26483E-06,
         5.98639E-04,  1.35203E-04, -3.77587E-04,  6.14351E+01, -7.66097E-04,
        -9.10228E-04, -7.62911E-04,  4.64455E-04, -5.90757E-04,  1.75855E-04,
        -4.61107E-04,  2.90898E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         2.75287E+04,  2.01723E-04, -3.62144E-04,  1.93481E-05,  4.42977E+04,
         4.06369E-04,  6.24942E-04,  0.00000E+00, -6.15073E-04, -7.68710E-04,
        -4.94292E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
        -8.40575E-04,  7.04181E-04, -6.52120E-04, -7.23069E-04,  6.60584E-04,
         3.51227E-02, -4.87202E-03, -1.38886E+01,  9.04373E-04,  0.00000E+00,
         8.71967E-03,  5.34861E-03,  2.05162E-03, -6.29037E-04,  5.93192E-04,
         7.39999E-04, -5.84158E-04, -6.84878E-04,  3.74536E-04, -5.30187E-04,
        -9.70491E-04,  8.11722E-04, -2.22747E-04, -1.14572E-04,  4.79642E-04,
        -3.18254E-04,  1.09040E-04,  8.00669E-04,  3.11815E+01, -1.44921E-03,
        -1.92927E-03, -3.27505E-03,  3.29986E-03, -3.08091E-03,  7.91168E+00,
        -6.64196E-03,  4.95419E-03,  4.76737E-03,  6.88263E-03, -7.69578E-03,
        -8.06338E-03,  2.12172E+01, -9.94553E-04,  1.59599E-04,  3.60123E-04,
         4.52471E-04,  5.79377E+01, -7.87883E-04,  1.48176E-02,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TLB
    [
         1.03486E+00,  1.55312E-02, -1.11318E-02,  4.80914E-03,  3.28312E-03,
         5.48257E-03, -2.59902E-03,  1.73934E-03,  4.31933E-03,  5.42794E-03,
        -2.57697E-03,  5.61335E-03,  8.67663E-03,  1.82972E+01,  8.19322E-04,
        -4.30394E-03,  1.96481E-03,  9.20547E+01,  5.37522E-03,  1.86097E-03,
         5.89475E-06,  2.13329E-03,  3.82152E-03,  5.46643E-03,  4.36335E-02,
         2.59951E+00, -2.18596E-02, -5.24316E-03,  9.66581E-03, -1.13209E-07,
         9.60443E-03,  1.15173E+01, -1.87877E-03,  1.98457E-04,  2.38828E-04,
        -5.28189E-04,  3.73624E-04, -4.41800E-03,  9.92721E+01,  6.21228E-04,
         4.73968E-04,  8.62051E-03,  2.92730E-03,  3.06113E-02,  1.20228E+00,
        -4.08429E-04, -6.55020E-04,  3.87724E-04, -9.68481E-04, -1.64183E-04,
        -4.89752E-03, -5.92589E-05, -7.11257E-04,  0.00000E+00,  5.22546E-04,
         7.42102E-04, -8.42529E-04, -1.37332E-04,  4.03409E+04, -3.30836E-06,
        -2.52990E-04, -1.29909E-04, -5.69628E-04, -6.29193E+01,  4.36494E-04,
         4.42105E-04, -6.12103E-04,  7.98606E-04,  8.01299E-04, -4.59956E-04,
        -8.44873E-04,  4.32453E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         2.72962E+04,  9.16190E-04, -6.09794E-04,  8.11814E-05,  2.30969E+04,
         4.16356E-04,  4.73127E-04,  0.00000E+00, -6.01181E-04, -3.65169E-04,
         3.34852E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
        -9.52927E-04,  6.96847E-04,  3.32693E-04,  5.49652E-04,  8.74579E-04,
        -3.14303E-02, -6.63552E-03,  2.15863E+01,  6.87639E-04,  0.00000E+00,
         6.86298E-03,  7.82548E-03,  1.53695E-03,  7.17970E-04, -3.52792E-04,
         5.76725E-04, -2.56606E-04, -1.75771E-04, -5.36190E-04,  2.32278E-04,
        -6.18379E-04,  6.86384E-04, -5.28570E-04,  8.39840E-04, -4.62923E-04,
         2.41851E-04, -9.63358E-04, -3.77904E-04,  4.52202E+01,  8.77858E-03,
        -3.80018E-03, -7.52316E-03, -1.11840E-03, -8.31312E-03,  9.21470E+00,
         7.15298E-03, -4.63170E-03, -3.64562E-03,  2.32426E-03,  4.44124E-03,
         4.58383E-03,  9.50287E+00, -3.82700E-04,  3.27013E-04,  2.63297E-04,
        -2.11520E-04,  2.33747E+01, -4.21279E-04,  1.38302E-02,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // O2
    [
         1.01767E+00, -1.19381E-01,  8.97324E-02, -2.75081E-02,  4.78086E-02,
        -2.77834E-02,  3.93626E-02, -3.63584E-02, -3.34507E-02,  5.47507E-02,
         4.28152E-02, -2.87981E-02,  4.76733E-02,  1.09702E+01, -1.33348E-03,
         3.02656E-02, -2.16289E-02,  1.09234E+02,  5.34563E-02,  5.98054E-03,
         5.93244E-06,  2.72709E-03,  1.71543E-02, -5.54355E-03,  3.30232E-02,
         1.30515E+00, -1.66178E-01, -3.83854E-02,  4.14679E-02,  7.73896E-07,
        -9.09724E-03,  5.65976E+00,  4.31906E-03,  3.31922E-04, -5.49073E-04,
         7.10917E-04,  2.32238E-04, -3.97426E-02,  8.98144E+01, -6.86602E-04,
        -2.00056E-04, -2.91314E-03, -5.63650E-03,  4.75591E-02,  1.25490E+00,
         3.30140E-04, -2.34751E-04, -1.89968E-04,  2.36176E-04,  3.71499E-04,
         5.83014E-03, -8.71620E-05, -8.06364E-04,  0.00000E+00,  5.12717E-04,
        -6.59221E-04, -8.54921E-04,  1.62448E-04,  3.98954E+04,  9.53467E-06,
         7.75466E-04,  4.15930E-04,  1.28476E-04,  3.36793E+01,  5.27297E-04,
         6.90909E-04, -9.27814E-04, -3.45331E-04, -2.18628E-04, -7.40479E-04,
         8.77055E-04,  5.54054E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         2.52450E+04, -4.81248E-04,  7.50366E-04,  4.73990E-05,  2.16690E+04,
         6.86112E-04,  5.06529E-04,  0.00000E+00,  9.18467E-04,  8.79136E-04,
        -3.13967E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
        -4.74805E-04,  7.57249E-04,  4.78088E-04,  8.36949E-04,  1.02074E-04,
        -6.77909E-02, -5.44754E-03,  5.52235E+01, -8.67896E-04,  0.00000E+00,
        -8.02643E-03,  4.89458E-03,  3.81018E-03, -4.13938E-04, -3.53890E-04,
        -1.27673E-04,  9.21201E-04,  5.20090E-04,  2.53258E-04, -5.73817E-04,
         9.94994E-04,  1.83543E-04, -5.58139E-04, -7.37936E-04, -6.52136E-04,
        -2.43117E-04, -5.56982E-04, -6.53734E-04, -8.28877E+01,  5.94038E-03,
         7.03830E-03,  9.11828E-03,  9.53679E-03, -3.18527E-03,  6.30719E+00,
        -6.45100E-03,  6.05402E-03, -1.70312E-03, -4.03967E-03, -6.42003E-03,
         5.49971E-03,  1.67334E+01, -2.54334E-04, -7.00161E-04,  1.31020E-04,
         8.68807E-04, -4.71839E+01, -4.13340E-04,  6.98923E-03,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // Ar
    [
         9.41170E-01, -1.00318E-01, -1.41468E-01, -5.34991E-02,  5.05039E-02,
        -2.90941E-02, -1.01346E-02,  4.94956E-02, -5.67822E-02,  1.56891E-02,
        -5.89981E-03, -5.79988E-02,  4.05831E-02,  2.79988E+01,  2.04684E-04,
         2.33529E-02,  3.86299E-02,  9.58314E+01,  3.51633E-02,  5.12374E-03,
         7.12297E-06,  5.37271E-03, -1.07792E-02,  4.35634E-03,  4.60047E-02,
         1.69253E+00,  1.35102E-01, -5.84959E-02, -3.23803E-02,  5.95670E-07,
         1.56680E-03,  5.38831E+00, -2.00713E-03, -9.89964E-04,  2.07515E-04,
        -7.30364E-04, -9.90389E-04,  2.80386E-02,  8.30471E+01,  1.61886E-04,
         4.51057E-04,  9.63352E-03, -3.63191E-03,  4.90436E-02,  1.37481E+00,
        -3.93970E-04, -4.99981E-04, -1.03223E-04,  6.48047E-04,  2.57115E-04,
        -3.93236E-03, -1.65279E-04,  9.24330E-04,  0.00000E+00,  6.90960E-04,
         4.08444E-04,  7.24023E-04, -7.61195E-04,  2.00353E+04,  9.39485E-06,
         9.02065E-04,  7.03263E-04, -7.31295E-04,  8.85390E+01,  8.78042E-04,
        -7.45227E-04, -4.33026E-04, -4.04003E-04,  8.22540E-04, -7.55370E-04,
         4.65349E-04,  4.21276E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         4.97604E+04, -5.89432E-04, -1.40918E-04, -6.90088E-05,  2.03543E+04,
         9.83160E-04,  8.05867E-04,  0.00000E+00, -5.55241E-04,  2.79027E-04,
         9.29961E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
        -6.78294E-04,  3.51092E-04,  3.49005E-04, -1.12203E-04,  3.19578E-04,
        -8.07790E-02, -2.63725E-03, -6.14489E+01,  1.76283E-04,  0.00000E+00,
        -8.76831E-03, -4.68324E-03, -8.59122E-03, -2.08954E-04,  6.24339E-04,
         9.69808E-04,  2.17636E-04, -8.39227E-04,  9.89481E-04,  7.97943E-04,
         5.00313E-04, -7.83728E-04, -8.40439E-04, -8.12220E-04, -2.21057E-04,
         3.86290E-04, -4.41531E-04,  1.84416E-04, -2.29798E+01,  7.31357E-03,
         5.39929E-03,  3.46477E-03, -4.05844E-03,  6.51301E-03,  1.43918E+01,
         9.70610E-03,  7.99643E-03,  1.07013E-03, -4.19714E-03,  1.71029E-03,
         7.25738E-03,  7.24997E+00, -1.58226E-04,  8.65563E-04, -6.73267E-04,
        -2.57313E-04, -2.91308E+01,  4.25360E-04,  8.69592E-03,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // H
    [
         1.01258E+00,  1.71040E-01,  8.49798E-02, -3.00245E-02,  2.35165E-02,
         3.32065E-02, -3.07929E-02,  5.37133E-02, -4.54897E-02, -5.49609E-02,
        -3.58307E-02,  1.66892E-02,  2.57999E-02,  1.87650E+01, -1.96583E-03,
        -2.77037E-02, -3.58368E-02,  1.03559E+02,  1.62381E-02,  5.73270E-03,
        -7.87258E-06,  3.54885E-03, -1.92515E-02, -2.15038E-03,  2.03246E-02,
         2.76648E+00,  1.22396E-01,  2.83133E-02,  2.63045E-02,  9.79256E-07,
         8.46175E-03,  8.22018E+00, -1.79879E-03,  9.34237E-04, -4.65670E-04,
        -6.61127E-04, -2.75908E-04,  2.25350E-02,  9.09121E+01,  4.19878E-04,
        -2.10107E-04, -8.58238E-03,  7.38196E-03,  1.77955E-02,  1.17716E+00,
         2.25549E-04,  6.81032E-04,  1.99997E-04, -4.17174E-04,  1.93164E-04,
         9.35730E-03, -1.84176E-04,  8.77074E-04,  0.00000E+00, -8.16710E-04,
         4.70456E-04, -2.10431E-04,  4.79331E-04,  2.94569E+04, -4.01252E-06,
         2.73392E-04,  5.71680E-04, -1.00402E-04, -6.73591E+01, -7.67306E-04,
         2.73899E-04, -4.09360E-04, -3.32973E-04, -6.78597E-04,  9.84358E-04,
         7.56640E-04,  3.87698E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         3.67914E+04,  1.76538E-04,  2.35603E-04,  1.99850E-05,  5.33778E+04,
        -6.38570E-04, -8.71456E-04,  0.00000E+00, -5.77845E-04, -4.59180E-04,
         5.21915E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         8.24657E-04,  1.01199E-04, -3.57247E-04, -5.57782E-04, -5.11159E-04,
         8.17624E-02, -9.66947E-03,  4.93998E+01,  9.11152E-04,  0.00000E+00,
        -5.79545E-03, -1.26026E-03,  3.78182E-03,  6.34002E-04,  5.80976E-04,
         2.17601E-04,  3.30750E-04, -7.64987E-04, -5.35784E-04, -1.32000E-04,
        -9.68726E-04,  7.87354E-04,  8.13242E-04, -8.95573E-04, -2.84215E-04,
         9.40261E-04, -2.11005E-04,  1.49503E-04, -7.99303E+01, -8.70488E-03,
        -2.24263E-03,  1.50911E-03, -6.88707E-03,  7.68550E-03,  8.54715E+00,
         8.06508E-03, -3.64085E-03,  8.07239E-03, -9.73203E-03,  2.49270E-03,
         9.28882E-03,  7.88590E+00, -1.45677E-04,  2.29315E-04,  5.52415E-04,
         4.79041E-04, -8.91382E+01,  7.10858E-04,  1.31320E-02,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // N
    [
         1.09061E+00, -1.40836E-01,  1.15187E-01, -4.61976E-02, -4.71490E-02,
         1.91968E-02,  4.63134E-02,  1.85205E-02,  8.05528E-03, -3.37352E-02,
        -1.66998E-02,  1.21215E-02,  8.55062E-03,  1.63606E+01,  1.71007E-03,
        -3.95566E-02, -1.37101E-02,  1.01502E+02, -5.05239E-02,  5.33395E-03,
        -5.55225E-06,  3.29051E-03, -2.76925E-03, -1.47009E-03,  4.48604E-02,
         2.21398E+00, -1.28009E-01,  4.25062E-02, -5.55569E-02, -7.49041E-07,
        -3.90954E-03,  8.40297E+00,  9.36107E-03,  3.59936E-04,  3.85922E-04,
         9.45027E-04, -4.69758E-04, -4.24506E-02,  8.85217E+01,  6.61791E-04,
        -3.96610E-04,  7.45297E-03, -4.11859E-03,  4.56521E-02,  1.57148E+00,
         6.18232E-04,  5.81854E-04, -2.37315E-04, -5.90677E-04,  3.35688E-04,
        -6.31997E-03, -7.35199E-05, -5.63113E-04,  0.00000E+00, -8.46544E-04,
         4.15433E-04, -5.87589E-04, -6.67711E-04,  4.82203E+04, -3.19814E-06,
        -3.51239E-04, -6.57361E-04,  5.33487E-04,  3.49242E+01, -9.78222E-04,
        -6.65142E-04,  3.65238E-04,  5.84325E-04, -3.91813E-04, -5.26126E-04,
         5.02787E-04,  5.86709E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         4.85060E+04, -4.51082E-04, -5.28213E-04,  1.63830E-05,  5.59690E+04,
         2.72013E-04,  4.56240E-04,  0.00000E+00,  6.63226E-04,  4.21220E-04,
        -8.20431E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         7.62673E-04, -9.07991E-04, -5.50608E-04, -2.64820E-04, -8.52857E-04,
         8.86814E-02, -1.46498E-03, -7.39778E+01, -4.52439E-04,  0.00000E+00,
        -5.66261E-03,  8.38128E-03,  1.36269E-03,  3.59598E-04,  6.52460E-04,
        -4.14494E-04, -3.56437E-04, -1.38369E-04, -3.84957E-04,  4.55399E-04,
         4.45089E-04, -6.19031E-04, -6.40722E-04, -2.39387E-04, -2.59064E-04,
        -2.34826E-04,  6.24409E-04, -9.11911E-04, -7.20131E+01, -9.91586E-03,
        -5.93709E-03, -1.78849E-03, -2.02090E-03, -3.64938E-03,  2.01298E+01,
        -9.74709E-03,  1.18985E-03,  9.58184E-03,  3.75569E-03, -4.84450E-03,
         4.54370E-03,  1.10021E+01, -7.50254E-04,  5.48857E-04,  7.36116E-04,
        -4.52379E-04,  2.32981E+01,  5.65998E-04,  1.39605E-02,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // anomalous O
    [
         1.17528E+00, -1.19750E-01, -1.28196E-01,  1.66238E-02,  2.63099E-02,
         4.05637E-02,  1.78984E-02,  6.13269E-03, -7.97726E-03, -8.42789E-03,
         4.10575E-02,  1.62006E-02, -3.21725E-02,  2.83143E+01,  1.20839E-03,
        -2.41066E-02, -5.61605E-02,  9.95321E+01, -5.93294E-03,  2.03379E-03,
        -4.00281E-06,  3.07265E-03,  1.60517E-02,  5.80144E-03,  3.12420E-02,
         1.34297E+00, -1.31244E-01,  2.81020E-02,  4.26522E-02,  9.41840E-07,
         1.14287E-03,  1.12950E+01,  5.61630E-03,  2.36393E-04, -1.53365E-04,
         9.12709E-04,  7.28705E-04, -1.62110E-02,  8.85340E+01,  7.92649E-04,
        -7.21603E-04,  8.81531E-03,  2.51183E-03,  4.65691E-02,  1.11587E+00,
         5.26791E-04, -7.65806E-04, -2.08942E-04, -7.25176E-04,  3.64507E-04,
        -2.87226E-03, -9.60071E-05, -3.41412E-04,  0.00000E+00,  3.31057E-04,
         8.63135E-04, -8.00118E-04, -5.74178E-04,  2.62375E+04,  3.62277E-06,
         3.66829E-04,  9.04307E-04, -7.11076E-04, -1.57724E+01, -4.04532E-04,
        -7.79937E-04, -9.17901E-04, -6.50893E-04,  4.27754E-04, -7.56694E-04,
         7.33358E-04,  3.61028E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         5.27709E+04,  3.21382E-04, -7.86149E-04, -4.30539E-05,  4.36634E+04,
        -4.01723E-04, -5.60613E-04,  0.00000E+00, -5.03342E-04,  9.64852E-04,
         9.54811E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
        -8.27380E-04, -9.76777E-04, -6.72304E-04, -3.24299E-04, -9.10580E-04,
         4.60814E-02,  6.41060E-03, -4.53969E+01,  5.51282E-04,  0.00000E+00,
         2.17303E-03,  7.35473E-03,  1.86437E-03,  6.87404E-04,  2.18426E-04,
         5.54108E-04, -2.07751E-04,  1.86055E-04, -6.41078E-04,  4.54817E-04,
         5.12436E-04, -2.34459E-04, -2.93425E-04, -5.51854E-04,  2.76023E-04,
        -7.57578E-04,  8.88255E-04, -2.39584E-04, -2.74345E+01, -3.89283E-03,
         3.63209E-03,  2.63830E-03, -7.11076E-03, -5.89597E-03,  1.84852E+01,
        -1.46919E-03, -7.34543E-03,  9.77643E-03, -5.76101E-03, -5.54339E-03,
        -5.18441E-03,  1.09316E+01,  9.31755E-04, -3.01525E-04,  2.41570E-04,
        -5.17371E-04, -8.65496E+01,  7.16518E-04,  1.26546E-02,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
];

/// Temperature gradient (shape parameter) expansion.
pub(crate) static PS: [f64; 150] = [
     9.94915E-01, -1.82340E-02, -1.69799E-02, -6.69718E-03,  6.09765E-03,
     7.70263E-03, -1.40022E-03, -3.33597E-03,  2.75383E-03,  2.52936E-03,
    -8.43593E-03,  6.25857E-03, -3.03556E-03,  1.11135E+01, -3.46873E-04,
    -8.78046E-03,  5.37434E-03,  9.33147E+01, -3.18477E-03,  3.16171E-03,
    -3.37508E-06,  2.92956E-03, -7.13910E-03,  3.64266E-03,  4.27491E-02,
     2.21673E+00,  3.64978E-03, -3.46391E-03,  6.33412E-03, -3.19728E-07,
    -5.48743E-03,  9.33678E+00, -3.60338E-03, -5.00002E-04, -8.47273E-04,
    -9.69226E-04,  1.48959E-04,  7.41872E-03,  9.38562E+01,  8.20360E-04,
     7.78440E-04, -8.49945E-03,  9.93759E-03,  1.29055E-02,  1.30259E+00,
    -2.75188E-04, -1.78485E-04, -2.68035E-04,  9.54671E-04,  1.02798E-04,
    -5.24056E-03, -1.70513E-04, -8.31048E-04,  0.00000E+00, -9.35988E-04,
     4.66907E-04, -9.84657E-04,  8.60527E-04,  3.68009E+04,  1.20706E-06,
    -9.29351E-04, -4.61950E-04, -5.76579E-04, -8.99220E+00, -9.87727E-04,
     6.97882E-04, -8.20488E-04,  6.19218E-04,  7.10693E-04, -5.64348E-04,
    -8.52158E-04,  4.66206E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     3.46343E+04,  6.10719E-04,  4.88806E-04,  8.70077E-05,  5.84539E+04,
     5.82784E-04,  2.35621E-04,  0.00000E+00,  8.85910E-04,  1.20605E-04,
    -6.76892E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     9.84732E-04,  1.18571E-04,  4.48129E-04, -4.31741E-04, -1.18128E-04,
     4.38422E-02,  9.30979E-03, -5.87015E+01,  4.50774E-04,  0.00000E+00,
     1.38554E-03, -6.06432E-03,  7.90743E-03,  1.73261E-04,  7.03599E-04,
     9.09655E-04, -2.49766E-04,  6.25760E-04,  8.09886E-04,  2.13305E-04,
     9.04674E-04, -9.30544E-04,  3.31734E-04,  5.71413E-04,  8.59399E-04,
     2.26763E-04, -1.84938E-04, -8.69915E-04, -4.07912E+01,  4.88254E-03,
     5.96142E-03, -7.81949E-03, -7.50199E-03,  4.53596E-03,  3.56104E+00,
     9.28902E-03,  5.55586E-03,  3.27185E-03, -8.95434E-03, -5.75468E-03,
    -8.37490E-03,  2.34653E+00,  2.00795E-04,  9.36308E-04, -8.41506E-04,
     2.83297E-04,  6.52633E+01,  3.86404E-04,  1.34112E-02,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
];

/// Turbopause and correction scale parameters.
pub(crate) static PDL: [[f64; 25]; 2] = [
    [
         8.73186E-01,  4.99586E-01,  4.92135E-05,  1.09971E+00,  2.48887E+00,
         1.50602E-01,  1.00476E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  1.20699E+00,  2.48594E-03,  1.44475E-01,
    ],
    [
         7.98181E-01,  8.68228E-01,  8.47864E-01,  8.06912E-01,  9.77055E-01,
         2.93189E+00,  7.83967E-01,  8.33828E-01,  8.99642E-01,  9.06226E-01,
         8.51369E-01,  8.86283E-01,  1.15107E+00,  1.20353E+00,  2.41705E-02,
         1.20000E+02, -4.53793E+00,  5.00138E-07,  8.52896E-01,  1.15791E+00,
         5.07977E-02,  3.55895E-01,  2.94648E-01, -4.84620E-03,  9.89511E-01,
    ],
];

/// Temperature reference constants.
pub(crate) static PTM: [f64; 10] = [
     1.04130E+03,  3.86000E+02,  1.95000E+02,  1.66728E+01,  2.13000E+02,
     1.20000E+02,  2.40300E+02,  1.87000E+02,  2.50000E+00,  0.00000E+00,
];

/// Species reference constants: boundary density, mixing ratio,
/// turbopause altitude and correction scale bases per species.
pub(crate) static PDM: [[f64; 10]; 8] = [
    // He
    [
         2.45600E+07,  6.71072E-06,  1.00000E+02,  0.00000E+00,  1.10000E+02,
         1.00000E+01,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // O
    [
         8.59400E+10,  1.00000E+00,  1.05000E+02, -8.00000E+00,  1.10000E+02,
         1.00000E+01,  9.00000E+01,  2.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // N2
    [
         2.81000E+11,  0.00000E+00,  1.10000E+02,  1.00000E+01,  2.89500E+01,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // O2
    [
         3.30000E+10,  2.68270E-01,  1.10000E+02,  1.00000E+01,  1.10000E+02,
         1.00000E+01,  3.00000E+02,  1.00000E+01,  0.00000E+00,  0.00000E+00,
    ],
    // Ar
    [
         1.33000E+09,  1.19615E-02,  1.05000E+02,  0.00000E+00,  1.10000E+02,
         1.00000E+01,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // H
    [
         1.76100E+05,  1.00000E+00,  9.50000E+01, -8.00000E+00,  1.10000E+02,
         1.00000E+01,  9.00000E+01,  2.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // N
    [
         1.00000E+07,  1.00000E+00,  1.05000E+02, -8.00000E+00,  1.10000E+02,
         1.00000E+01,  9.00000E+01,  2.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // anomalous O
    [
         1.00000E+06,  1.00000E+00,  1.05000E+02, -8.00000E+00,  5.50000E+02,
         7.60000E+01,  9.00000E+01,  2.00000E+00,  0.00000E+00,  4.00000E+03,
    ],
];

/// Lower thermosphere temperature node expansions (110, 100, 90,
/// 72.5 km).
pub(crate) static PTL: [[f64; 100]; 4] = [
    // tn1(2)
    [
         1.00858E+00, -1.23802E-03, -2.24399E-03, -6.45350E-03,  3.26890E-03,
        -9.80301E-04,  3.59072E-03,  6.07140E-03, -5.27577E-04, -3.84092E-03,
        -4.31833E-03,  1.38405E-04,  8.26105E-04,  1.01729E+01,  5.97769E-03,
        -3.54631E-03, -8.97812E-03,  1.01899E+02,  8.18887E-03,  0.00000E+00,
        -9.68223E-03,  3.20171E-04, -5.90643E-03,  6.83764E-04,  0.00000E+00,
         0.00000E+00,  8.89552E-03,  0.00000E+00,  0.00000E+00,  1.11625E-03,
         4.39790E-03,  6.08181E+00, -2.21047E-03, -1.16119E-04, -4.03635E-04,
        -8.32133E-04,  4.35003E-04, -8.15359E-03,  9.15249E+01,  5.23034E-04,
        -7.61717E-04, -2.54191E-04,  3.15298E-04,  0.00000E+00,  0.00000E+00,
         6.15810E-04,  0.00000E+00, -5.51719E-03,  0.00000E+00,  0.00000E+00,
        -3.01311E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  5.60294E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -6.95934E-04,
         7.76858E-04, -6.87625E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -2.48911E-04,
         3.00533E-04,  5.74746E-04, -2.76539E-04,  5.63550E-04, -3.11473E-04,
         7.93893E-03,  1.38379E+01,  0.00000E+00, -8.29735E-03,  1.93395E+01,
        -4.00808E-03,  9.72112E+01,  2.08591E-03,  9.18032E+01,  0.00000E+00,
         1.85461E-04, -4.10282E-04, -1.84801E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  4.40554E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tn1(3)
    [
         9.98148E-01,  1.03030E-03,  7.82827E-03,  5.23705E-03,  9.80587E-03,
         5.06430E-04,  9.98188E-03, -9.76714E-03,  3.71992E-04,  3.56787E-03,
         5.64573E-03,  6.03452E-04,  8.06561E-04,  2.67111E+01, -4.88002E-03,
         4.97404E-03,  8.51024E-03,  1.05362E+02,  9.50008E-03,  0.00000E+00,
         7.87935E-03,  7.43055E-04, -9.67548E-03, -6.29527E-04,  0.00000E+00,
         0.00000E+00,  9.31682E-03,  0.00000E+00,  0.00000E+00, -7.62817E-03,
         7.89643E-03,  8.31048E+00, -6.09680E-03, -8.52049E-04, -6.67296E-04,
         4.28788E-04, -1.47902E-04, -3.71816E-03,  8.66670E+01, -1.94133E-04,
        -6.07006E-04, -8.66004E-04,  2.53739E-04,  0.00000E+00,  0.00000E+00,
         7.17534E-04,  0.00000E+00,  4.09709E-03,  0.00000E+00,  0.00000E+00,
         8.26169E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -3.58408E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -8.69727E-04,
        -7.07061E-04,  3.89847E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -5.17430E-04,
         8.61624E-04, -9.91178E-04,  1.21501E-04, -4.06263E-04,  3.27766E-04,
         3.07652E-03,  1.97254E+01,  0.00000E+00,  4.29198E-03,  2.07185E+01,
         4.40729E-03,  9.43645E+01, -7.09905E-03,  8.11735E+01,  0.00000E+00,
         1.98185E-04,  8.84438E-04, -3.35437E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  4.43546E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tn1(4)
    [
         9.89305E-01,  3.32484E-03,  6.57339E-03, -4.11439E-03, -4.81074E-03,
         8.51198E-04,  6.19718E-03, -4.89746E-03,  5.46000E-04,  3.93706E-03,
         6.92132E-03,  2.23079E-04,  1.53484E-04,  2.69870E+01, -5.65205E-03,
         3.48466E-03,  1.60945E-03,  9.79437E+01, -3.47808E-03,  0.00000E+00,
         9.10498E-03,  8.86647E-04,  4.46308E-03, -6.79697E-04,  0.00000E+00,
         0.00000E+00,  4.69821E-03,  0.00000E+00,  0.00000E+00,  7.16774E-03,
        -5.54098E-03,  1.48024E+01, -3.41894E-03,  9.98512E-04, -2.75398E-04,
         8.83942E-04,  7.13258E-04, -8.02575E-03,  8.16867E+01, -2.01328E-04,
         8.18451E-04,  8.54845E-04, -5.87966E-04,  0.00000E+00,  0.00000E+00,
         4.29319E-04,  0.00000E+00,  5.16026E-03,  0.00000E+00,  0.00000E+00,
         8.26586E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -2.50622E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  5.35411E-04,
         3.72518E-04, -7.17128E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -8.71762E-04,
        -9.82525E-04,  6.46181E-04,  2.25539E-04,  5.08296E-04, -1.37347E-04,
        -2.45496E-03,  1.66715E+01,  0.00000E+00,  9.75422E-03,  2.66426E+01,
        -2.44089E-03,  1.03539E+02,  8.13167E-03,  8.61400E+01,  0.00000E+00,
         9.90218E-04, -3.28969E-04,  4.20840E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -3.91368E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tn1(5)
    [
         9.86073E-01, -5.00225E-03,  4.77882E-03,  3.31237E-03, -6.47433E-03,
        -2.76547E-04, -1.82625E-03,  9.72810E-03,  5.29870E-04,  1.31519E-03,
        -5.67347E-03, -4.56325E-04, -2.92029E-04,  2.97330E+01, -6.09908E-03,
        -4.31282E-03,  1.23971E-03,  1.02255E+02,  7.92593E-03,  0.00000E+00,
        -1.59858E-03, -6.73231E-04, -5.08368E-03,  5.56402E-04,  0.00000E+00,
         0.00000E+00,  9.44943E-03,  0.00000E+00,  0.00000E+00,  6.97261E-03,
        -9.95863E-03,  1.40076E+01, -9.84898E-03, -5.91573E-04,  6.99915E-04,
        -8.84805E-04, -4.23183E-04,  1.50481E-03,  8.19500E+01, -8.35294E-04,
        -2.78544E-04, -5.75191E-04, -3.06385E-04,  0.00000E+00,  0.00000E+00,
         7.19222E-04,  0.00000E+00,  4.48445E-03,  0.00000E+00,  0.00000E+00,
        -2.77491E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -2.60581E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -5.97356E-04,
         3.88782E-04, -5.41660E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  8.10494E-04,
        -3.68048E-04, -9.94705E-04,  8.70351E-04, -6.54133E-04, -7.49628E-04,
         5.26912E-03,  2.11201E+01,  0.00000E+00,  2.79496E-03,  2.67891E+01,
        -7.01134E-03,  1.00750E+02,  8.25471E-03,  8.08877E+01,  0.00000E+00,
        -3.36813E-04,  9.77455E-04,  4.82416E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -8.24389E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
];

/// Middle/lower atmosphere temperature node and gradient expansions.
pub(crate) static PMA: [[f64; 100]; 10] = [
    // tn2(2)
    [
         9.96828E-01,  9.67626E-03, -3.06369E-03, -7.54473E-03, -6.22589E-03,
        -4.27854E-04,  6.96922E-03,  5.16338E-03,  7.99848E-04, -4.66652E-03,
         7.88663E-03, -7.32137E-04,  8.01876E-04,  2.02658E+01, -5.00552E-03,
         7.57873E-03, -7.34669E-03,  1.08046E+02,  6.09349E-03,  0.00000E+00,
        -4.47049E-03, -5.06394E-04,  6.06464E-03,  2.85682E-04,  0.00000E+00,
         0.00000E+00, -4.41585E-03,  0.00000E+00,  0.00000E+00, -3.63060E-03,
        -1.50394E-03,  1.74228E+01,  7.95096E-03,  3.14309E-04,  4.75225E-04,
         2.41061E-04, -1.11504E-04, -2.43954E-03,  8.69632E+01,  9.62522E-04,
         6.11396E-04, -9.51762E-04,  8.03125E-04,  0.00000E+00,  0.00000E+00,
         1.18489E-04,  0.00000E+00, -8.95105E-03,  0.00000E+00,  0.00000E+00,
         2.12528E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -2.97792E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -7.75482E-04,
        -2.94983E-04,  4.75930E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -1.76698E-04,
        -6.30763E-04,  2.37906E-04, -6.25923E-04, -5.28534E-04,  9.38387E-04,
         8.04255E-03,  1.28143E+01,  0.00000E+00,  7.63594E-03,  1.56647E+01,
         7.99142E-03,  1.00093E+02,  5.12269E-03,  9.86250E+01,  0.00000E+00,
        -3.77116E-04, -3.97901E-04, -3.97020E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  4.87325E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tn2(3)
    [
         1.00149E+00,  7.78560E-03, -5.94981E-03, -9.70656E-03, -6.88061E-03,
        -6.80355E-04, -7.57444E-03, -7.70700E-03,  6.06553E-04,  6.51133E-03,
         3.27867E-03,  1.25331E-04,  2.94367E-04,  2.94167E+01,  1.89630E-03,
         9.69546E-03, -9.81915E-03,  1.02059E+02,  1.48382E-03,  0.00000E+00,
         4.39034E-03,  2.03966E-04, -8.38448E-03,  8.65246E-04,  0.00000E+00,
         0.00000E+00, -5.00186E-03,  0.00000E+00,  0.00000E+00,  4.46623E-03,
         5.26920E-03,  1.68327E+01, -6.40753E-03,  5.78710E-04, -4.42326E-04,
         5.36116E-04, -5.34705E-04,  8.68861E-03,  8.90642E+01,  6.80267E-04,
        -1.10703E-04, -9.80837E-04,  3.30973E-04,  0.00000E+00,  0.00000E+00,
        -4.53564E-04,  0.00000E+00,  3.82749E-03,  0.00000E+00,  0.00000E+00,
        -4.64531E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  3.30027E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -4.07479E-04,
         1.49558E-04,  5.51269E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -9.09647E-04,
         7.64200E-04, -8.22885E-04, -5.96540E-04, -8.52046E-04, -3.71977E-04,
         7.66503E-03,  2.76194E+01,  0.00000E+00,  1.82306E-03,  2.78430E+01,
         4.11250E-03,  9.49466E+01,  9.97140E-03,  9.40695E+01,  0.00000E+00,
        -3.03855E-04, -8.05784E-04, -5.87359E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  5.18420E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tn2(4)
    [
         9.97296E-01, -5.19727E-03,  2.23352E-03,  3.39175E-03,  5.20399E-03,
         9.46886E-04, -5.19539E-03,  5.10513E-03,  9.71989E-04, -9.50041E-03,
        -9.89429E-03,  5.40631E-04,  6.93545E-04,  2.25411E+01,  3.89609E-03,
        -5.42597E-03, -9.49751E-03,  9.64866E+01, -6.56577E-03,  0.00000E+00,
         5.88792E-03, -8.31085E-04,  3.32558E-03, -5.92838E-04,  0.00000E+00,
         0.00000E+00, -8.15070E-03,  0.00000E+00,  0.00000E+00,  4.87245E-03,
        -4.66095E-03,  1.12679E+01,  5.92005E-03,  9.08384E-04,  3.97709E-04,
        -6.63529E-04, -1.51259E-04, -1.64637E-03,  9.75133E+01, -1.57547E-04,
         1.30855E-04,  5.06409E-04, -9.85373E-04,  0.00000E+00,  0.00000E+00,
         7.40038E-04,  0.00000E+00, -7.71809E-03,  0.00000E+00,  0.00000E+00,
         2.27880E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  9.54995E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  6.51411E-04,
         5.59396E-04,  7.72000E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -3.88951E-04,
         8.60368E-04, -8.06202E-04, -5.81551E-04,  7.60519E-04,  4.76754E-04,
         1.71507E-03,  1.50435E+01,  0.00000E+00,  6.17312E-03,  2.88679E+01,
        -9.60977E-03,  1.03637E+02, -8.98326E-03,  9.19534E+01,  0.00000E+00,
         3.86750E-04, -6.04371E-04, -7.83145E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  2.11902E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tn3(2)
    [
         9.99500E-01,  6.03960E-03, -3.86589E-03, -8.48646E-03, -6.13855E-03,
        -5.18717E-04,  3.89916E-03,  4.79946E-03, -3.24166E-04, -5.89196E-03,
        -2.75730E-03, -4.13674E-04,  6.47738E-04,  1.91304E+01, -7.66114E-03,
        -5.68478E-03, -7.19379E-03,  9.72957E+01, -4.25349E-03,  0.00000E+00,
         6.61710E-03, -5.90239E-04, -4.69014E-03,  2.64374E-04,  0.00000E+00,
         0.00000E+00,  3.33314E-03,  0.00000E+00,  0.00000E+00, -6.75179E-03,
        -7.36296E-03,  1.99862E+01, -3.48168E-03,  2.86886E-04,  6.61400E-04,
         7.76273E-04,  8.26726E-04, -5.65528E-03,  8.65680E+01,  5.94364E-04,
        -9.68155E-04, -9.59806E-04,  2.26932E-04,  0.00000E+00,  0.00000E+00,
        -1.97172E-04,  0.00000E+00, -3.98892E-03,  0.00000E+00,  0.00000E+00,
        -7.95099E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -1.92010E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  2.88424E-04,
         3.63028E-04, -6.41955E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  2.06860E-04,
         2.93205E-04,  4.99727E-04,  3.63564E-04,  5.63505E-04, -9.12741E-04,
         1.12649E-03,  1.95407E+01,  0.00000E+00, -2.65138E-03,  1.09281E+01,
        -1.09064E-03,  9.41233E+01, -3.19405E-03,  8.78933E+01,  0.00000E+00,
         5.55045E-04,  3.09493E-04,  7.35959E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  1.74222E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tn3(3)
    [
         9.98206E-01, -8.32940E-03, -2.41048E-03,  2.18382E-03,  7.37894E-03,
         2.89732E-04, -7.63303E-03,  3.68525E-03,  5.37621E-04,  3.23018E-03,
         1.54151E-03,  8.58239E-04,  6.24004E-04,  1.27644E+01, -4.75343E-03,
         2.05018E-03,  1.39775E-03,  9.86641E+01,  8.31588E-03,  0.00000E+00,
         6.42480E-03,  2.51392E-04, -2.09389E-03, -3.49020E-04,  0.00000E+00,
         0.00000E+00,  4.35445E-03,  0.00000E+00,  0.00000E+00, -2.51061E-03,
        -5.51003E-03,  5.83488E+00,  4.58643E-03, -4.53752E-04,  3.70296E-04,
        -8.09730E-04, -7.84037E-04, -8.32586E-03,  9.31205E+01, -7.97352E-04,
        -1.89612E-04,  1.97924E-04, -6.74335E-04,  0.00000E+00,  0.00000E+00,
        -5.54423E-04,  0.00000E+00,  2.99679E-03,  0.00000E+00,  0.00000E+00,
         9.45248E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -3.42176E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -1.52690E-04,
        -8.93771E-04,  2.70894E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -2.40492E-04,
         6.44982E-04, -3.70259E-04, -5.42740E-04, -7.73775E-04, -9.26282E-04,
         9.15710E-03,  2.46794E+01,  0.00000E+00, -9.40763E-03,  1.07224E+01,
        -9.64262E-03,  9.17203E+01,  1.91474E-03,  9.15265E+01,  0.00000E+00,
        -6.21366E-04,  7.68012E-04,  2.73621E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -7.33290E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tn3(4)
    [
         1.00231E+00,  3.46030E-03, -6.82083E-03, -4.45468E-03,  6.52085E-03,
        -4.00468E-04,  3.81505E-03, -4.32457E-03, -3.33724E-04, -7.66557E-03,
         2.15667E-03,  5.98415E-04, -5.10498E-04,  2.98927E+01,  6.14391E-03,
         4.95223E-03, -7.61751E-03,  1.08207E+02, -8.95947E-03,  0.00000E+00,
        -8.78265E-03, -4.51110E-04, -6.61580E-03,  6.68521E-04,  0.00000E+00,
         0.00000E+00, -4.59921E-03,  0.00000E+00,  0.00000E+00, -7.08479E-03,
         3.44345E-03,  6.32256E+00,  5.61296E-03,  6.95827E-04,  2.28562E-04,
         5.54598E-04,  3.58307E-04, -6.09953E-03,  9.94936E+01, -7.42051E-04,
         5.16924E-04, -2.36261E-04, -3.77651E-04,  0.00000E+00,  0.00000E+00,
        -3.83108E-04,  0.00000E+00,  1.79421E-03,  0.00000E+00,  0.00000E+00,
        -3.21033E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -6.88443E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  7.59795E-04,
         5.55465E-04,  4.15233E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -5.00079E-04,
        -7.67255E-04, -2.22645E-04,  1.06171E-04, -9.53436E-04,  8.36275E-04,
        -4.13111E-03,  1.94488E+01,  0.00000E+00, -5.98810E-03,  2.45910E+01,
        -3.61813E-03,  1.08836E+02,  5.66522E-03,  8.39297E+01,  0.00000E+00,
        -6.63409E-04,  8.49347E-04, -9.88492E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -9.21342E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tn3(5)
    [
         1.00516E+00,  7.61465E-03, -2.51689E-03,  9.67218E-03, -7.06081E-03,
        -7.37590E-04,  9.01861E-03,  8.39124E-03,  1.47858E-04, -7.33033E-03,
        -6.81847E-03, -3.05514E-04,  8.04949E-04,  2.54821E+01,  6.30431E-03,
         8.99163E-03, -1.58943E-03,  1.02703E+02, -2.49748E-03,  0.00000E+00,
        -2.37892E-03,  1.76592E-04, -3.09352E-03,  4.43324E-04,  0.00000E+00,
         0.00000E+00, -6.25498E-03,  0.00000E+00,  0.00000E+00, -1.47921E-03,
         1.92661E-03,  1.66003E+01,  4.20359E-03, -5.15583E-04,  5.45299E-04,
        -1.29885E-04, -4.27574E-04,  8.62472E-03,  9.04537E+01, -4.32349E-04,
         7.83598E-04, -9.61629E-04, -4.77197E-04,  0.00000E+00,  0.00000E+00,
        -5.22776E-04,  0.00000E+00, -4.13530E-03,  0.00000E+00,  0.00000E+00,
        -3.58020E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  2.93555E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  9.47739E-04,
        -5.93669E-04,  2.85054E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  9.14852E-04,
         5.40855E-04, -4.61459E-04, -1.87560E-04, -6.79401E-04,  1.42955E-04,
         7.09305E-03,  2.16298E+01,  0.00000E+00,  6.83623E-03,  1.41239E+01,
        -4.03566E-03,  1.02075E+02,  5.35057E-03,  9.40906E+01,  0.00000E+00,
         5.09501E-04,  5.61999E-04, -9.36654E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -2.17219E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tgn3(2)
    [
         1.00779E+00, -4.30409E-03, -5.87082E-03,  1.47984E-03, -6.32911E-03,
         2.42947E-04, -8.81479E-03,  2.01927E-03, -8.88831E-04, -6.46499E-03,
         9.94124E-03,  6.14997E-04, -7.19339E-04,  2.07547E+01,  8.34237E-03,
         2.35179E-03,  2.85092E-03,  9.44666E+01, -3.26363E-03,  0.00000E+00,
         7.30096E-03,  4.50368E-04,  2.29004E-03,  1.52048E-04,  0.00000E+00,
         0.00000E+00,  5.14620E-03,  0.00000E+00,  0.00000E+00,  7.84796E-03,
        -6.21647E-03,  5.48488E+00,  7.41358E-03, -9.23079E-04,  7.86179E-04,
        -3.78462E-04,  8.70884E-04,  8.70818E-03,  9.92468E+01, -5.34231E-04,
         8.33667E-04,  3.43317E-04, -7.03403E-04,  0.00000E+00,  0.00000E+00,
        -4.42059E-04,  0.00000E+00, -1.54145E-03,  0.00000E+00,  0.00000E+00,
        -8.82602E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -6.94318E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -7.68383E-04,
        -1.71497E-04, -8.70987E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  5.50892E-04,
        -5.56649E-04,  3.72463E-04,  4.28606E-04,  7.93888E-04,  9.07027E-04,
         2.66767E-03,  2.78145E+01,  0.00000E+00, -9.47208E-03,  1.97061E+01,
        -8.69169E-03,  9.96284E+01, -4.28826E-03,  8.67948E+01,  0.00000E+00,
         2.79891E-04,  6.22409E-04,  1.61400E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -7.38436E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tgn1(2)
    [
        -9.88538E-01,  5.69122E-03,  9.75117E-03, -1.45198E-03, -3.55367E-03,
         4.75204E-04, -2.62207E-03,  1.66925E-03, -6.05931E-04,  4.41482E-03,
         4.70542E-03, -9.85519E-04, -7.58734E-04,  1.52103E+01, -2.74239E-03,
        -6.61041E-03, -8.97330E-03,  9.27343E+01, -2.26411E-03,  0.00000E+00,
        -8.97925E-03,  7.81146E-04, -9.38014E-03,  3.43530E-04,  0.00000E+00,
         0.00000E+00, -3.71497E-03,  0.00000E+00,  0.00000E+00,  9.07263E-03,
         7.33692E-03,  1.71557E+01,  7.80091E-03,  5.12274E-04,  6.51201E-04,
        -7.38012E-04, -7.93361E-04,  4.75159E-03,  8.99217E+01,  7.81271E-04,
        -2.90552E-04,  2.35641E-04,  7.71229E-04,  0.00000E+00,  0.00000E+00,
         7.42429E-04,  0.00000E+00, -1.37400E-03,  0.00000E+00,  0.00000E+00,
         1.67628E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  8.01341E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -8.27227E-04,
        -7.27393E-04,  3.36048E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  8.62210E-04,
        -7.76108E-04, -6.96500E-04, -8.04403E-04, -2.60385E-04, -9.85515E-04,
        -2.04713E-03,  1.92789E+01,  0.00000E+00, -8.22622E-03,  1.86259E+01,
         8.98354E-03,  1.05349E+02, -7.63997E-03,  9.12479E+01,  0.00000E+00,
         3.56911E-04,  2.32735E-04, -3.85621E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -5.19634E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // tgn2(1)
    [
         1.01029E+00, -5.06333E-03,  8.46738E-03,  2.07444E-03,  2.74298E-03,
        -1.07647E-04, -3.11247E-03,  1.92324E-03, -2.86331E-04,  2.05422E-03,
        -4.38860E-03, -8.36713E-04,  5.15810E-04,  1.87034E+01,  5.86628E-03,
         7.35468E-03, -9.15020E-03,  1.04084E+02, -6.06853E-03,  0.00000E+00,
        -1.80167E-03,  9.58772E-04, -1.21511E-03,  5.72812E-04,  0.00000E+00,
         0.00000E+00,  6.85885E-03,  0.00000E+00,  0.00000E+00,  6.63373E-03,
        -6.59143E-03,  1.70632E+01,  2.46729E-03, -8.27941E-04, -5.58304E-04,
         7.54310E-04, -4.47421E-04, -3.25347E-03,  9.72056E+01, -4.87185E-04,
        -1.66124E-04,  7.83686E-04, -4.94300E-04,  0.00000E+00,  0.00000E+00,
         2.54000E-04,  0.00000E+00,  3.57461E-03,  0.00000E+00,  0.00000E+00,
        -7.12210E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -2.73781E-03,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  5.29894E-04,
        -2.65298E-04,  4.71690E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  2.26847E-04,
         6.95174E-04, -6.06705E-04, -7.37086E-04, -4.67360E-04,  3.37841E-04,
        -1.21173E-03,  2.37306E+01,  0.00000E+00, -5.32638E-03,  2.62907E+01,
         1.69801E-03,  1.08288E+02,  7.54376E-03,  9.89477E+01,  0.00000E+00,
         6.08320E-04,  8.54009E-04,  3.99995E-04,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -1.00536E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
];

/// Middle atmosphere temperature averages.
pub(crate) static PAVGM: [f64; 10] = [
     2.61000E+02,  2.64900E+02,  2.27400E+02,  2.17250E+02,  2.17100E+02,
     2.23600E+02,  2.88150E+02, -6.50000E+00,  1.70000E+00,  0.00000E+00,
];
