use crate::model::MenuItem;


pub const LOGO_URL: &str = "https://1000logos.net/wp-content/uploads/2023/04/Whataburger-Logo.jpg";
pub const TAGLINE: &str = "Taste the Tradition of Texas!";
pub const TITLE: &str = "Our Signature Menu";

static MENU: [MenuItem; 5] = [
    MenuItem {
        id: 1,
        title: "Whataburger",
        price: "$4.75",
        description: "Classic 100% pure beef patty, fresh veggies, and our signature bun.",
        image: "https://dynl.mktgcdn.com/p/wbvASP0FodJxR5yVpOCKTl1DWi0hgnqfTupzOjp7_nc/1900x1266.jpg",
    },
    MenuItem {
        id: 2,
        title: "Double Meat Whataburger",
        price: "$5.95",
        description: "Double the beef, double the flavor, with all the fresh toppings.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRSR6FyNKGde7ljIASIrsxLLxzQIR-Zn_w4_Q&s",
    },
    MenuItem {
        id: 3,
        title: "Avocado Bacon Burger",
        price: "$6.75",
        description: "Fresh avocado, smoky bacon, cheese, and a juicy beef patty.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR6TtRecF-XY2qPyIktcHHg6-T3XpJiBH__uQ&s",
    },
    MenuItem {
        id: 4,
        title: "Honey BBQ Chicken Strip",
        price: "$5.99",
        description: "Crispy chicken strips, tangy BBQ sauce, and melted cheese.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRCDdCmwFG5uhrztebs9HDTmpkp3szkMhdKbQ&s",
    },
    MenuItem {
        id: 5,
        title: "French Fries",
        price: "$2.49",
        description: "Golden and crisp, the perfect side for your burger.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQ7bsRai9-4WFWkOWz77oHhnYq1tAVHMAWFXA&s",
    },
];


// The fixed menu, in display order
pub fn menu_items() -> &'static [MenuItem] {
    &MENU
}
